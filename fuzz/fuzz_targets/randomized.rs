#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use quicksort_comp::quicksort::randomized as test_sort;
use quicksort_comp_fuzz::{check_sorted, u8_as_i32};

// The first 8 bytes seed the pivot rng, so crashes reproduce.
fuzz_target!(|data: &[u8]| {
    let Some((seed, rest)) = data.split_first_chunk::<8>() else {
        return;
    };
    let v = u8_as_i32(rest);

    let mut sorted = v.clone();
    let mut rng = SmallRng::seed_from_u64(u64::from_le_bytes(*seed));
    test_sort::sort_with_rng(&mut sorted, &mut rng);

    check_sorted(&v, &sorted);
});
