//! Bubble sort. Always N - 1 passes, no early exit, O(N²) comparisons on every input.

use std::cmp::Ordering;

sort_impl!("bubble_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // After pass `i` the largest `i + 1` elements are in their final place.
    for i in 0..len - 1 {
        for j in 0..len - 1 - i {
            if is_less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_comparison_count() {
        for len in [0usize, 1, 2, 7, 30] {
            let mut v = (0..len as i32).collect::<Vec<_>>();
            let mut comps = 0;
            sort_by(&mut v, |a, b| {
                comps += 1;
                a.cmp(b)
            });

            // No early exit, sorted input costs the same as any other.
            assert_eq!(comps, len * len.saturating_sub(1) / 2);
        }
    }
}
