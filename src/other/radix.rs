//! LSD radix sort over decimal digits.
//!
//! Every pass distributes the elements into ten FIFO queues by one decimal digit of their key,
//! least significant digit first, and concatenates the queues back in order. Queues preserve the
//! order of equal digits, so each pass is stable and after `digit_count` passes the slice is sorted
//! by key. Cost is O(digit_count * N), independent of the input order.
//!
//! The number of digits is chosen by the caller and never inferred from the data. Keys with more
//! digits than requested are only sorted by their low `digit_count` digits.

use std::collections::VecDeque;

/// Number of queues, one per decimal digit.
pub const RADIX: usize = 10;

/// Enough digits for every `u32` and every non-negative `i32`.
pub const DEFAULT_DIGIT_COUNT: u32 = 10;

/// Integer types radix sort can use directly as their own key.
///
/// Keys must be non-negative. A negative key is a precondition violation, it panics in debug
/// builds and the resulting order is unspecified in release builds.
pub trait RadixKey: Copy {
    fn radix_key(self) -> u64;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn radix_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(
            impl RadixKey for $t {
                #[inline]
                fn radix_key(self) -> u64 {
                    debug_assert!(self >= 0, "radix sort requires non-negative keys, got {}", self);
                    self as u64
                }
            }
        )*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, usize);
impl_radix_key_signed!(i8, i16, i32, i64, isize);

/// Sorts `v` with [`DEFAULT_DIGIT_COUNT`] digit passes.
#[inline]
pub fn sort<T: RadixKey>(v: &mut [T]) {
    sort_with_digits(v, DEFAULT_DIGIT_COUNT);
}

/// Sorts `v` looking at the lowest `digit_count` decimal digits of every element.
#[inline]
pub fn sort_with_digits<T: RadixKey>(v: &mut [T], digit_count: u32) {
    radix_sort(v, digit_count, &mut |x: &T| x.radix_key());
}

/// Stable sort of arbitrary elements by a non-negative integer key.
pub fn sort_by_key<T, F>(v: &mut [T], digit_count: u32, mut key: F)
where
    T: Clone,
    F: FnMut(&T) -> u64,
{
    radix_sort(v, digit_count, &mut key);
}

fn radix_sort<T, F>(v: &mut [T], digit_count: u32, key: &mut F)
where
    T: Clone,
    F: FnMut(&T) -> u64,
{
    if v.len() < 2 {
        return;
    }

    let mut queues: [VecDeque<T>; RADIX] = Default::default();
    let mut factor = 1u64;

    for _ in 0..digit_count {
        for x in v.iter() {
            let digit = (key(x) / factor) % RADIX as u64;
            queues[digit as usize].push_back(x.clone());
        }

        let mut queued = queues.iter_mut().flat_map(|queue| queue.drain(..));
        for slot in v.iter_mut() {
            if let Some(x) = queued.next() {
                *slot = x;
            }
        }
        debug_assert!(queued.next().is_none());
        drop(queued);

        // 10^20 does not fit into a u64, all higher digits of every key are zero.
        match factor.checked_mul(RADIX as u64) {
            Some(next) => factor = next,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_digit_example() {
        let mut v = [170, 45, 75, 90, 802, 24, 2, 66];
        sort_with_digits(&mut v, 3);
        assert_eq!(v, [2, 24, 45, 66, 75, 90, 170, 802]);
    }

    #[test]
    fn too_few_digits_sorts_low_digits_only() {
        let mut v = [802u32, 24, 170];
        sort_with_digits(&mut v, 1);
        assert_eq!(v, [170, 802, 24]);
    }

    #[test]
    fn zero_digits_is_noop() {
        let mut v = [3u8, 1, 2];
        sort_with_digits(&mut v, 0);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn more_digits_than_u64_holds() {
        let mut v = [u64::MAX, 0, u64::MAX - 1, 10_000_000_000_000_000_000];
        sort_with_digits(&mut v, 25);
        assert_eq!(v, [0, 10_000_000_000_000_000_000, u64::MAX - 1, u64::MAX]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn negative_key_fails_fast() {
        let mut v = [3i32, -1, 2];
        sort(&mut v);
    }
}
