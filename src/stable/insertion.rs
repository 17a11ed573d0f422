//! Insertion sort, whole slice and inclusive sub-range.
//!
//! O(N²) in general but O(N) on input that is already (nearly) sorted, which is why quick sort
//! hands it small partitions and shell sort is built from gapped passes of it.

use std::cmp::Ordering;
use std::mem::ManuallyDrop;
use std::ptr;

sort_impl!("insertion_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts only the inclusive window `v[left..=right]`, leaving the rest of `v` untouched.
///
/// Panics if `right` is out of bounds. An empty window (`left > right`) is a no-op.
#[inline]
pub fn sort_range<T>(v: &mut [T], left: usize, right: usize)
where
    T: Ord,
{
    sort_range_by(v, left, right, |a, b| a.cmp(b));
}

pub fn sort_range_by<T, F>(v: &mut [T], left: usize, right: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if left > right {
        return;
    }

    insertion_sort(&mut v[left..=right], &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    insertion_sort_gapped(v, 1, is_less);
}

/// One insertion pass over every `gap`-th element. With a gap of 1 this is plain insertion sort,
/// with larger gaps it is a single round of shell sort.
pub(crate) fn insertion_sort_gapped<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap != 0);

    let len = v.len();
    if len < 2 || gap == 0 {
        return;
    }

    for i in gap..len {
        // SAFETY: i < len and i >= gap.
        unsafe {
            insert_tail_gapped(&mut v[..=i], gap, is_less);
        }
    }
}

// When dropped, copies from `src` into `dest`.
struct InsertionHole<T> {
    src: *const T,
    dest: *mut T,
}

impl<T> Drop for InsertionHole<T> {
    fn drop(&mut self) {
        // SAFETY: `src` points at the held element and `dest` at the current hole, which never
        // overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.src, self.dest, 1);
        }
    }
}

/// Inserts the last element of `v` into the already gap-sorted chain
/// `v[len - 1 - gap], v[len - 1 - 2 * gap], ...`.
///
/// # Safety
///
/// `v.len() > gap` and `gap > 0`.
unsafe fn insert_tail_gapped<T, F>(v: &mut [T], gap: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    debug_assert!(gap > 0 && v.len() > gap);

    let arr_ptr = v.as_mut_ptr();
    let mut i = v.len() - 1;

    unsafe {
        let i_ptr = arr_ptr.add(i);

        // Compare against the element in place first, so an element that is already in position
        // is never read out of the slice.
        if !is_less(&*i_ptr, &*i_ptr.sub(gap)) {
            return;
        }

        // From here on `tmp` is the value compared against, it is also the value written back.
        let tmp = ManuallyDrop::new(ptr::read(i_ptr));

        // If `is_less` panics, dropping `hole` writes `tmp` into the gap, so `v` still holds every
        // element exactly once.
        let mut hole = InsertionHole {
            src: &*tmp,
            dest: i_ptr.sub(gap),
        };
        ptr::copy_nonoverlapping(hole.dest, i_ptr, 1);
        i -= gap;

        while i >= gap {
            let prev_ptr = arr_ptr.add(i - gap);
            if !is_less(&*tmp, &*prev_ptr) {
                break;
            }

            ptr::copy_nonoverlapping(prev_ptr, hole.dest, 1);
            hole.dest = prev_ptr;
            i -= gap;
        }
        // `hole` gets dropped and thus copies `tmp` into the remaining gap in `v`.
    }
}
