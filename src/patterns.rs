//! Seeded input generators for the empirical analysis. Currently limited to i32 values.
//!
//! All generators derive their values from one process wide seed. Every call advances a counter
//! that is mixed into the seed, so consecutive inputs differ while a whole run stays repeatable
//! given the seed.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::OnceCell;

use rand::prelude::*;

// --- Public ---

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    // `len` down to 1, not 0.
    (1..=len as i32).rev().collect()
}

/// Fixes the seed if none was chosen yet and returns the seed in effect.
///
/// The first call wins. Without an explicit seed a random one is drawn once per process, report
/// it to make a run repeatable.
pub fn init_seed(seed: Option<u64>) -> u64 {
    *SEED.get_or_init(|| seed.unwrap_or_else(|| thread_rng().gen()))
}

pub fn random_init_seed() -> u64 {
    init_seed(None)
}

// --- Private ---

static SEED: OnceCell<u64> = OnceCell::new();
static GENERATOR_CALLS: AtomicU64 = AtomicU64::new(0);

fn new_rng() -> StdRng {
    let call = GENERATOR_CALLS.fetch_add(1, Ordering::Relaxed);

    StdRng::seed_from_u64(random_init_seed().wrapping_add(call))
}
