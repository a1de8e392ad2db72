/// A sort implementation under test or benchmark.
///
/// Only natural ordering is supported, there is no `sort_by`.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;
}

pub mod patterns;
