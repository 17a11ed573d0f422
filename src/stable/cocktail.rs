//! Cocktail shaker sort, a bidirectional bubble sort.
//!
//! Each round sweeps the window `[round, len - 1 - round]` upwards, carrying the largest element to
//! the top, then downwards, carrying the smallest to the bottom. Both sweeps use the same `is_less`,
//! so `sort` is ascending and a reversed `compare` passed to `sort_by` is the way to get descending
//! order. Stops after the first round without a swap, or once the window is down to its midpoint.

use std::cmp::Ordering;

sort_impl!("cocktail_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    cocktail_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    cocktail_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn cocktail_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for round in 0..len / 2 {
        let top = len - 1 - round;
        let mut was_swapped = false;

        for i in round..top {
            if is_less(&v[i + 1], &v[i]) {
                v.swap(i, i + 1);
                was_swapped = true;
            }
        }

        // v[top] now holds the largest element of the window.
        for i in (round + 1..top).rev() {
            if is_less(&v[i], &v[i - 1]) {
                v.swap(i, i - 1);
                was_swapped = true;
            }
        }

        if !was_swapped {
            break;
        }
    }
}
