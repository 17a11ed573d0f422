/// Common interface of every comparison sort in the workspace.
///
/// `name` must end in `_stable` or `_unstable`, the generic test suite only asserts stability for
/// the former.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub mod patterns;
