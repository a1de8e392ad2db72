//! Property-based tests for partitioning and both quicksort variants.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use quicksort_comp::{
    partition, randomized_partition, sort_deterministic, sort_randomized_with_rng,
    try_sort_deterministic, SortLimits,
};

fn sorted_copy(v: &[i32]) -> Vec<i32> {
    let mut expected = v.to_vec();
    expected.sort_unstable();
    expected
}

// Narrow value ranges produce many duplicates, which exercise the tie handling.
fn input_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        prop::collection::vec(any::<i32>(), 0..300),
        prop::collection::vec(-4..4i32, 0..300),
    ]
}

proptest! {
    /// Property: Elements left of the pivot are `<=` it, elements right of it are `>`
    #[test]
    fn partition_splits_around_last_element(v in prop::collection::vec(-50..50i32, 1..200)) {
        let pivot = *v.last().unwrap();
        let mut partitioned = v.clone();
        let pivot_pos = partition(&mut partitioned);

        prop_assert_eq!(partitioned[pivot_pos], pivot);
        prop_assert!(partitioned[..pivot_pos].iter().all(|&x| x <= pivot));
        prop_assert!(partitioned[pivot_pos + 1..].iter().all(|&x| x > pivot));
        prop_assert_eq!(pivot_pos, v[..v.len() - 1].iter().filter(|&&x| x <= pivot).count());
        prop_assert_eq!(sorted_copy(&partitioned), sorted_copy(&v));
    }

    /// Property: A randomized partition satisfies the same contract for the pivot it picked
    #[test]
    fn randomized_partition_is_a_partition(
        v in input_strategy().prop_filter("non-empty", |v| !v.is_empty()),
        seed in any::<u64>(),
    ) {
        let mut partitioned = v.clone();
        let pivot_pos = randomized_partition(&mut partitioned, &mut StdRng::seed_from_u64(seed));

        let pivot = partitioned[pivot_pos];
        prop_assert!(v.contains(&pivot));
        prop_assert!(partitioned[..pivot_pos].iter().all(|&x| x <= pivot));
        prop_assert!(partitioned[pivot_pos + 1..].iter().all(|&x| x > pivot));
        prop_assert_eq!(sorted_copy(&partitioned), sorted_copy(&v));
    }

    /// Property: Deterministic quicksort agrees with the standard library sort
    #[test]
    fn deterministic_matches_std(v in input_strategy()) {
        let mut sorted = v.clone();
        sort_deterministic(&mut sorted);

        prop_assert_eq!(sorted, sorted_copy(&v));
    }

    /// Property: Randomized quicksort agrees with the standard library sort for every seed
    #[test]
    fn randomized_matches_std(v in input_strategy(), seed in any::<u64>()) {
        let mut sorted = v.clone();
        sort_randomized_with_rng(&mut sorted, &mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(sorted, sorted_copy(&v));
    }

    /// Property: Sorting is idempotent and a second deterministic pass does the monotonic work
    #[test]
    fn sorting_sorted_input_is_idempotent(v in input_strategy()) {
        let mut sorted = v.clone();
        sort_deterministic(&mut sorted);
        let once = sorted.clone();

        let stats = try_sort_deterministic(&mut sorted, &SortLimits::UNBOUNDED).unwrap();

        prop_assert_eq!(&sorted, &once);
        let len = v.len() as u64;
        prop_assert_eq!(stats.comparisons, len * len.saturating_sub(1) / 2);
    }
}
