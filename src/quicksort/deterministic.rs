//! Quicksort with the last element of each range as pivot.
//!
//! Already sorted, reverse sorted and all equal inputs make every partition maximally
//! unbalanced, `n - 1` partitions and `n * (n - 1) / 2` comparisons.

use crate::error::SortError;

use super::{quicksort, ChoosePivot, SortLimits, SortStats};

sort_impl!("quicksort_deterministic");

/// Sorts `v` in place. Not stable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let result = try_sort(v, &SortLimits::UNBOUNDED);
    debug_assert!(result.is_ok(), "unbounded sort failed: {result:?}");
}

/// Sorts `v` in place within `limits`, see [`SortError`] for the state `v` is left in on error.
pub fn try_sort<T>(v: &mut [T], limits: &SortLimits) -> Result<SortStats, SortError>
where
    T: Ord,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b), &mut LastElement, limits)
}

struct LastElement;

impl ChoosePivot for LastElement {
    #[inline]
    fn choose_pivot(&mut self, len: usize) -> usize {
        len - 1
    }
}
