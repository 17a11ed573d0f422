//! Shell sort.
//!
//! Insertion sort is fast when every element is already close to its final position. Shell sort
//! gets there by running gapped insertion passes with a shrinking gap, the final pass with a gap
//! of 1 is a plain insertion sort over almost sorted data.
//!
//! The default gaps are Shell's original halving sequence `N/2, N/4, ..., 1`. The gap sequence only
//! affects performance, [`sort_with_gaps`] accepts any strictly decreasing sequence ending in 1.

use std::cmp::Ordering;

use crate::stable::insertion::insertion_sort_gapped;

sort_impl!("shell_unstable");

/// Experimentally derived gaps, see Ciura 2001 "Best Increments for the Average Case of
/// Shellsort". Given in ascending order, [`sort_with_gaps`] expects them descending.
pub const CIURA_GAPS: [usize; 8] = [1, 4, 10, 23, 57, 132, 301, 701];

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let gaps = halving_gaps(v.len());
    shell_sort(v, gaps, &mut |a, b| a.lt(b));
}

#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let gaps = halving_gaps(v.len());
    shell_sort(v, gaps, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Shell sort with a caller chosen gap sequence.
///
/// Panics if `gaps` is not strictly decreasing or does not end in 1, such a sequence would leave
/// the slice unsorted.
pub fn sort_with_gaps<T, I>(v: &mut [T], gaps: I)
where
    T: Ord,
    I: IntoIterator<Item = usize>,
{
    let gaps = gaps.into_iter().collect::<Vec<_>>();
    assert!(
        is_valid_gap_sequence(&gaps),
        "gap sequence must be strictly decreasing and end in 1: {gaps:?}"
    );

    shell_sort(v, gaps.into_iter(), &mut |a, b| a.lt(b));
}

/// Shell sort with the Ciura gaps, skipping gaps that are not smaller than `v.len()`.
pub fn sort_ciura<T>(v: &mut [T])
where
    T: Ord,
{
    let gaps = ciura_gaps(v.len());
    shell_sort(v, gaps, &mut |a, b| a.lt(b));
}

pub fn sort_ciura_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let gaps = ciura_gaps(v.len());
    shell_sort(v, gaps, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// Ciura gaps as a `Sort` implementation, so they run through the same test suite.
pub mod ciura {
    use std::cmp::Ordering;

    sort_impl!("shell_ciura_unstable");

    #[inline]
    pub fn sort<T: Ord>(v: &mut [T]) {
        super::sort_ciura(v);
    }

    #[inline]
    pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], compare: F) {
        super::sort_ciura_by(v, compare);
    }
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn shell_sort<T, F>(v: &mut [T], gaps: impl Iterator<Item = usize>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    for gap in gaps {
        insertion_sort_gapped(v, gap, is_less);
    }
}

fn halving_gaps(len: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(len / 2), |gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}

fn ciura_gaps(len: usize) -> impl Iterator<Item = usize> {
    CIURA_GAPS.into_iter().rev().filter(move |&gap| gap < len)
}

fn is_valid_gap_sequence(gaps: &[usize]) -> bool {
    gaps.last() == Some(&1) && gaps.windows(2).all(|w| w[0] > w[1])
}
