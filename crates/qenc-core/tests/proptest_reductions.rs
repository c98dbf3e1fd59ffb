use proptest::prelude::*;
use qenc_core::{get_max, get_min, ComputationMode};

// Property 1: Reductions return the true extremes of the sample
proptest! {
    #[test]
    fn prop_reduction_is_exact(values in prop::collection::vec(-1.0e6f64..1.0e6f64, 1..6000)) {
        let expected_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let expected_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for mode in [ComputationMode::Cpu, ComputationMode::Gpu] {
            prop_assert_eq!(get_min(&values, mode), expected_min);
            prop_assert_eq!(get_max(&values, mode), expected_max);
        }
    }
}

// Property 2: Splitting a sample anywhere and merging the halves changes nothing
proptest! {
    #[test]
    fn prop_reduction_is_partition_invariant(
        values in prop::collection::vec(-500.0f32..500.0f32, 0..300),
        split in 0usize..300
    ) {
        let split = split.min(values.len());
        let (left, right) = values.split_at(split);
        let mode = ComputationMode::Cpu;

        let merged_min = get_min(left, mode).min(get_min(right, mode));
        let merged_max = get_max(left, mode).max(get_max(right, mode));

        prop_assert_eq!(merged_min, get_min(&values, mode));
        prop_assert_eq!(merged_max, get_max(&values, mode));
    }
}
