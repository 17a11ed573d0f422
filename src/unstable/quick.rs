//! Quicksort with median-of-three pivot selection and an insertion sort cutoff.
//!
//! The median of the first, middle and last element is used as pivot. Ordering those three
//! elements in place leaves a sentinel at both ends of the range, and the pivot is hidden at
//! `right - 1` while the rest is partitioned. Ranges shorter than [`SMALL_SORT_THRESHOLD`] are
//! handed to insertion sort.

use std::cmp::Ordering;
use std::mem;

use crate::stable::insertion::insertion_sort;

sort_impl!("quick_unstable");

/// Ranges with fewer elements than this are insertion sorted instead of partitioned, in index
/// terms `left + 5 > right`. Must stay at least 3 for median-of-three to be defined.
pub const SMALL_SORT_THRESHOLD: usize = 6;

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < SMALL_SORT_THRESHOLD {
            insertion_sort(v, is_less);
            return;
        }

        let pivot_pos = partition(v, is_less);

        let (left, right) = mem::take(&mut v).split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Recurse into the smaller side and continue with the larger one, this bounds the
        // recursion depth to O(log N) even if every pivot is a bad one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around its median-of-three and returns the final position of the pivot.
/// Everything before it is not greater than the pivot, everything after it not less.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = median_of_three(v, is_less);

    // v[0] and v[len - 1] now bound the pivot from below and above and stop both scans. The index
    // checks only matter for an `is_less` that is not a strict weak order.
    let mut l = 0;
    let mut r = pivot_pos;
    loop {
        l += 1;
        while l < pivot_pos && is_less(&v[l], &v[pivot_pos]) {
            l += 1;
        }

        r -= 1;
        while r > 0 && is_less(&v[pivot_pos], &v[r]) {
            r -= 1;
        }

        if l < r {
            v.swap(l, r);
        } else {
            break;
        }
    }

    // Restore pivot.
    v.swap(l, pivot_pos);
    l
}

/// Orders the first, middle and last element of `v` and moves the median, the pivot, to
/// `v.len() - 2`. Returns that position.
fn median_of_three<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // Guaranteed by the cutoff in quicksort.
    debug_assert!(v.len() >= SMALL_SORT_THRESHOLD);

    let left = 0;
    let right = v.len() - 1;
    let center = (left + right) / 2;

    if is_less(&v[center], &v[left]) {
        v.swap(left, center);
    }
    if is_less(&v[right], &v[left]) {
        v.swap(left, right);
    }
    if is_less(&v[right], &v[center]) {
        v.swap(center, right);
    }

    // Hide the pivot.
    v.swap(center, right - 1);
    right - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recursion_and_cutoff() {
        let mut v = [9, 3, 7, 1, 8, 2, 5, 4, 6, 0];
        sort(&mut v);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn median_of_three_hides_pivot() {
        let mut v = [9, 3, 7, 1, 8, 2, 5, 4, 6, 0];
        let pivot_pos = median_of_three(&mut v, &mut |a: &i32, b: &i32| a < b);

        // first = 9, center = v[4] = 8, last = 0 -> ordered 0, 8, 9 with 8 as pivot.
        assert_eq!(pivot_pos, 8);
        assert_eq!(v[pivot_pos], 8);
        assert_eq!(v[0], 0);
        assert_eq!(v[9], 9);
        assert_eq!(v[4], 6);
    }

    #[test]
    fn partition_splits_around_pivot() {
        let mut v = [9, 3, 7, 1, 8, 2, 5, 4, 6, 0];
        let pivot_pos = partition(&mut v, &mut |a: &i32, b: &i32| a < b);

        assert_eq!(v[pivot_pos], 8);
        assert!(v[..pivot_pos].iter().all(|&x| x <= 8));
        assert!(v[pivot_pos + 1..].iter().all(|&x| x >= 8));
    }

    #[test]
    fn small_ranges_match_insertion_sort() {
        let inputs: [&[i32]; 6] = [&[], &[1], &[2, 1], &[3, 1, 2], &[4, 4, 1, 3], &[5, 1, 4, 2, 3]];

        for input in inputs {
            assert!(input.len() < SMALL_SORT_THRESHOLD);

            let mut quick = input.to_vec();
            let mut quick_comps = 0;
            sort_by(&mut quick, |a, b| {
                quick_comps += 1;
                a.cmp(b)
            });

            let mut insertion = input.to_vec();
            let mut insertion_comps = 0;
            crate::stable::insertion::sort_by(&mut insertion, |a, b| {
                insertion_comps += 1;
                a.cmp(b)
            });

            assert_eq!(quick, insertion);
            assert_eq!(quick_comps, insertion_comps);
        }
    }

    #[test]
    fn all_equal_terminates() {
        let mut v = vec![7; 1_000];
        sort(&mut v);
        assert!(v.iter().all(|&x| x == 7));
    }
}
