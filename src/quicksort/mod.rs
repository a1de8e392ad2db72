//! Non-recursive quicksort driver shared by the deterministic and randomized variants.
//!
//! Pending ranges live on an explicit stack instead of the call stack. After each partition the
//! larger side is pushed first, so the smaller side is processed next and at most
//! `floor(log2(len)) + 2` ranges are ever pending. Monotonic input fed to the deterministic
//! variant still does `O(n^2)` work, but it can no longer exhaust the native stack.

use std::cmp;
use std::ops::Range;

use crate::error::SortError;

use self::partition::lomuto_partition;

pub mod deterministic;
pub mod partition;
pub mod randomized;

/// Bounds for [`deterministic::try_sort`] and [`randomized::try_sort_with_rng`]. `None` means
/// unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortLimits {
    /// Longest input accepted, checked before the slice is touched.
    pub max_len: Option<usize>,
    /// Deepest recursion-tree level that may still be partitioned. The whole input sits at depth
    /// 0. This is the depth a recursive quicksort would reach in native stack frames.
    pub max_depth: Option<usize>,
}

impl SortLimits {
    pub const UNBOUNDED: Self = Self {
        max_len: None,
        max_depth: None,
    };

    pub fn with_max_len(self, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..self
        }
    }

    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    fn check_len(&self, len: usize) -> Result<(), SortError> {
        match self.max_len {
            Some(max_len) if len > max_len => Err(SortError::InputTooLarge { len, max_len }),
            _ => Ok(()),
        }
    }

    fn check_depth(&self, depth: usize) -> Result<(), SortError> {
        match self.max_depth {
            Some(max_depth) if depth > max_depth => {
                Err(SortError::DepthLimitExceeded { depth, max_depth })
            }
            _ => Ok(()),
        }
    }
}

/// What a single sort call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Calls to the element ordering.
    pub comparisons: u64,
    /// Ranges of two or more elements that were partitioned.
    pub partitions: u64,
    /// Recursion-tree depth of the deepest partitioned range.
    pub max_depth: usize,
    /// High-water mark of the pending range stack.
    pub max_pending: usize,
}

/// Pivot selection policy. Returns the position of the pivot within a range of `len >= 2`
/// elements, the driver moves it to the last position before partitioning.
pub(crate) trait ChoosePivot {
    fn choose_pivot(&mut self, len: usize) -> usize;
}

pub(crate) fn quicksort<T, F, P>(
    v: &mut [T],
    is_less: &mut F,
    pivot_policy: &mut P,
    limits: &SortLimits,
) -> Result<SortStats, SortError>
where
    F: FnMut(&T, &T) -> bool,
    P: ChoosePivot,
{
    limits.check_len(v.len())?;

    let mut stats = SortStats::default();
    let mut comparisons = 0;
    let mut counting_is_less = |a: &T, b: &T| {
        comparisons += 1;
        is_less(a, b)
    };

    // `0..0` is the empty range, no special case needed for empty input.
    let mut pending: Vec<(Range<usize>, usize)> = Vec::with_capacity(max_pending_len(v.len()));
    pending.push((0..v.len(), 0));

    let result = loop {
        let Some((range, depth)) = pending.pop() else {
            break Ok(());
        };

        let len = range.len();
        if len < 2 {
            continue;
        }

        if let Err(err) = limits.check_depth(depth) {
            break Err(err);
        }

        let v_range = &mut v[range.clone()];

        let pivot_pos = pivot_policy.choose_pivot(len);
        v_range.swap(pivot_pos, len - 1);

        let mid = range.start + lomuto_partition(v_range, &mut counting_is_less);

        stats.partitions += 1;
        stats.max_depth = cmp::max(stats.max_depth, depth);

        let left = range.start..mid;
        let right = (mid + 1)..range.end;
        let (larger, smaller) = if left.len() >= right.len() {
            (left, right)
        } else {
            (right, left)
        };

        pending.push((larger, depth + 1));
        pending.push((smaller, depth + 1));
        stats.max_pending = cmp::max(stats.max_pending, pending.len());
    };

    stats.comparisons = comparisons;

    result.map(|()| stats)
}

/// Upper bound of pending ranges when the smaller side is always processed first.
fn max_pending_len(len: usize) -> usize {
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    (len | 1).ilog2() as usize + 2
}
