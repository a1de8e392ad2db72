//! Quicksort with a uniformly random pivot per range.
//!
//! No fixed input order can force unbalanced partitions with more than negligible probability,
//! expected `O(n * log(n))` comparisons for every input without duplicates. Many duplicates still
//! degrade towards `O(n^2)`, because ties always go to the left side.

use rand::Rng;

use crate::error::SortError;

use super::partition::partition;
use super::{quicksort, ChoosePivot, SortLimits, SortStats};

sort_impl!("quicksort_randomized");

/// Sorts `v` in place, drawing pivots from the thread local rng. Not stable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_with_rng(v, &mut rand::thread_rng());
}

/// Sorts `v` in place, drawing pivots from `rng`. A seeded rng makes the result and the
/// [`SortStats`] reproducible.
pub fn sort_with_rng<T, R>(v: &mut [T], rng: &mut R)
where
    T: Ord,
    R: Rng + ?Sized,
{
    let result = try_sort_with_rng(v, rng, &SortLimits::UNBOUNDED);
    debug_assert!(result.is_ok(), "unbounded sort failed: {result:?}");
}

/// Sorts `v` in place within `limits`, see [`SortError`] for the state `v` is left in on error.
pub fn try_sort_with_rng<T, R>(
    v: &mut [T],
    rng: &mut R,
    limits: &SortLimits,
) -> Result<SortStats, SortError>
where
    T: Ord,
    R: Rng + ?Sized,
{
    quicksort(v, &mut |a: &T, b: &T| a.lt(b), &mut UniformPivot { rng }, limits)
}

/// Swaps a uniformly chosen element into the last position, then partitions around it like
/// [`partition`]. Returns the pivot's final index, `0` for an empty slice.
pub fn randomized_partition<T, R>(v: &mut [T], rng: &mut R) -> usize
where
    T: Ord,
    R: Rng + ?Sized,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let pivot_pos = UniformPivot { rng }.choose_pivot(len);
    v.swap(pivot_pos, len - 1);

    partition(v)
}

struct UniformPivot<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<R> ChoosePivot for UniformPivot<'_, R>
where
    R: Rng + ?Sized,
{
    #[inline]
    fn choose_pivot(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}
