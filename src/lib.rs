//! Classical sorting algorithms, each written out in full so they can be read, tested and
//! benchmarked side by side.
//!
//! Every comparison sort lives in its own module with the same surface: `sort`, `sort_by` and a
//! `SortImpl` type that plugs into the shared `sort_test_tools` suite. Radix sort is distribution
//! based and has its own entry points in [`other::radix`].

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod other;
pub mod stable;
pub mod unstable;
