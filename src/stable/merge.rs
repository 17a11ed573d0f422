//! Top-down merge sort with a single scratch buffer.
//!
//! The range is split at `center = (left + right) / 2`, both halves are sorted recursively and then
//! merged into the buffer and copied back. Ties take the left element first, which makes the sort
//! stable. Recursion depth is O(log N).

use std::cmp::Ordering;
use std::mem;
use std::ptr;

sort_impl!("merge_stable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types. Do nothing.
        return;
    }

    let len = v.len();
    if len < 2 {
        // These inputs are always sorted. Also avoids allocating a zero sized buffer.
        return;
    }

    // The buffer only ever holds bitwise copies and keeps a length of 0, so it never drops any
    // element. It is freed when this call returns.
    let mut buf = Vec::<T>::with_capacity(len);

    // SAFETY: `buf` has capacity for `len` elements, the largest range ever merged.
    unsafe {
        merge_sort_recursive(v, buf.as_mut_ptr(), is_less);
    }
}

/// # Safety
///
/// `buf` must be valid for writes of `v.len()` elements and must not overlap `v`.
unsafe fn merge_sort_recursive<T, F>(v: &mut [T], buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // Same split as center = (left + right) / 2 with right = len - 1, the left half gets the extra
    // element of an odd length range.
    let mid = (len - 1) / 2 + 1;

    unsafe {
        merge_sort_recursive(&mut v[..mid], buf, is_less);
        merge_sort_recursive(&mut v[mid..], buf, is_less);

        merge(v, mid, buf, is_less);
    }
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into `buf` and copies the result back into `v`.
///
/// `v` is only read until the final copy, so if `is_less` panics `v` still holds its original
/// elements in their original order.
///
/// # Safety
///
/// `buf` must be valid for writes of `v.len()` elements and must not overlap `v`.
unsafe fn merge<T, F>(v: &mut [T], mid: usize, buf: *mut T, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let v_ptr = v.as_mut_ptr();

    unsafe {
        let mut left = v_ptr as *const T;
        let left_end = v_ptr.add(mid) as *const T;
        let mut right = left_end;
        let right_end = v_ptr.add(len) as *const T;
        let mut out = buf;

        while left < left_end && right < right_end {
            // Only take from the right run if strictly less, equal elements keep their order.
            let take_right = is_less(&*right, &*left);
            let src = if take_right { right } else { left };

            ptr::copy_nonoverlapping(src, out, 1);
            out = out.add(1);

            if take_right {
                right = right.add(1);
            } else {
                left = left.add(1);
            }
        }

        // At most one of the runs has elements left, they are already in order.
        let left_rest = left_end.offset_from(left) as usize;
        ptr::copy_nonoverlapping(left, out, left_rest);
        out = out.add(left_rest);

        let right_rest = right_end.offset_from(right) as usize;
        ptr::copy_nonoverlapping(right, out, right_rest);

        ptr::copy_nonoverlapping(buf as *const T, v_ptr, len);
    }
}
