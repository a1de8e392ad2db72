//! Deterministic and randomized Lomuto quicksort, plus the harness used to compare them.

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
        }
    };
}

pub mod analysis;
pub mod error;
pub mod patterns;
pub mod quicksort;

pub use error::{AnalysisError, SortError};
pub use quicksort::deterministic::{sort as sort_deterministic, try_sort as try_sort_deterministic};
pub use quicksort::partition::partition;
pub use quicksort::randomized::{
    randomized_partition, sort as sort_randomized, sort_with_rng as sort_randomized_with_rng,
    try_sort_with_rng as try_sort_randomized_with_rng,
};
pub use quicksort::{SortLimits, SortStats};
