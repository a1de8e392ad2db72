//! Wall-clock measurement of sort calls.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// Result of [`time_sort`].
#[derive(Debug)]
pub struct Timed<T, R> {
    pub duration: Duration,
    /// The sorted copy of the input.
    pub output: Vec<T>,
    /// Whatever the sort function returned.
    pub result: R,
}

/// Measures the time it takes to execute the function `test_fn`.
#[inline(never)]
pub fn measure_duration<R>(test_fn: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = black_box(test_fn());
    let duration = start.elapsed();

    (duration, result)
}

/// Sorts a copy of `input` with `sort_fn`, timing only the sort call itself.
pub fn time_sort<T, R>(sort_fn: impl FnOnce(&mut [T]) -> R, input: &[T]) -> Timed<T, R>
where
    T: Clone,
{
    let mut output = input.to_vec();
    let (duration, result) = measure_duration(|| sort_fn(black_box(output.as_mut_slice())));

    Timed {
        duration,
        output,
        result,
    }
}

/// Median of the samples, `None` without samples. Reorders `durations`.
pub fn median(durations: &mut [Duration]) -> Option<Duration> {
    durations.sort_unstable();

    durations.get(durations.len() / 2).copied()
}
