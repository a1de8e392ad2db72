#![no_main]

use libfuzzer_sys::fuzz_target;

use quicksort_comp::quicksort::deterministic as test_sort;
use quicksort_comp_fuzz::{check_sorted, u8_as_i32};

fuzz_target!(|data: &[u8]| {
    let v = u8_as_i32(data);

    let mut sorted = v.clone();
    test_sort::sort(&mut sorted);

    check_sorted(&v, &sorted);
});
