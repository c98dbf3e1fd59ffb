use proptest::prelude::*;
use qenc_core::ComputationMode;
use qenc_quant::{EncodingAnalyzer, MinMaxEncodingAnalyzer, QuantError, MIN_RANGE};

// Relative slack for grid endpoints recomputed as `steps * delta`.
const SLACK: f64 = 1e-9;

fn analyzer_over(batches: &[Vec<f32>]) -> MinMaxEncodingAnalyzer<f32> {
    let mut analyzer = MinMaxEncodingAnalyzer::<f32>::new();
    for batch in batches {
        analyzer.update_stats(batch, ComputationMode::Cpu);
    }
    analyzer
}

fn batches() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-1000.0f32..1000.0f32, 0..40), 1..12)
}

fn modes() -> impl Strategy<Value = (bool, bool, bool)> {
    prop_oneof![
        Just((false, false, false)),
        Just((true, false, false)),
        Just((true, true, false)),
        Just((true, false, true)),
    ]
}

// Property 1: Accumulated stats are the true extremes, whatever the batching
proptest! {
    #[test]
    fn prop_stats_are_true_extremes(batches in batches()) {
        let analyzer = analyzer_over(&batches);
        let all: Vec<f64> = batches.iter().flatten().map(|&x| f64::from(x)).collect();
        let stats = analyzer.accumulated_stats();

        if all.is_empty() {
            prop_assert!(stats.is_empty());
        } else {
            prop_assert_eq!(stats.min, all.iter().copied().fold(f64::INFINITY, f64::min));
            prop_assert_eq!(stats.max, all.iter().copied().fold(f64::NEG_INFINITY, f64::max));
        }
    }
}

// Property 2: Reversing batch order or flattening into one batch changes nothing
proptest! {
    #[test]
    fn prop_merge_is_order_and_partition_free(batches in batches()) {
        let forward = analyzer_over(&batches);

        let mut reversed_batches = batches.clone();
        reversed_batches.reverse();
        let reversed = analyzer_over(&reversed_batches);

        let flat: Vec<f32> = batches.iter().flatten().copied().collect();
        let single = analyzer_over(&[flat]);

        prop_assert_eq!(forward.accumulated_stats(), reversed.accumulated_stats());
        prop_assert_eq!(forward.accumulated_stats(), single.accumulated_stats());
    }
}

// Property 3: Encodings always contain zero and are at least MIN_RANGE wide
proptest! {
    #[test]
    fn prop_encoding_contains_zero_and_min_range(
        batches in batches(),
        bitwidth in 2u8..=16,
        (sym, strict, unsigned) in modes()
    ) {
        let analyzer = analyzer_over(&batches);
        let enc = analyzer.compute_encoding(bitwidth, sym, strict, unsigned).unwrap();

        prop_assert_eq!(enc.bitwidth, bitwidth);
        prop_assert!(enc.min <= 0.0);
        prop_assert!(enc.max >= 0.0);
        prop_assert!(enc.max - enc.min >= MIN_RANGE * (1.0 - SLACK));
        prop_assert!(enc.delta > 0.0 && enc.delta.is_finite());
        prop_assert_eq!(enc.dequantize(enc.quantize(0.0)), 0.0);
    }
}

// Property 4: compute_encoding is pure
proptest! {
    #[test]
    fn prop_compute_encoding_is_repeatable(
        batches in batches(),
        bitwidth in 2u8..=16,
        (sym, strict, unsigned) in modes()
    ) {
        let analyzer = analyzer_over(&batches);
        let stats = analyzer.accumulated_stats();

        let first = analyzer.compute_encoding(bitwidth, sym, strict, unsigned).unwrap();
        for _ in 0..3 {
            let again = analyzer.compute_encoding(bitwidth, sym, strict, unsigned).unwrap();
            prop_assert_eq!(again.min.to_bits(), first.min.to_bits());
            prop_assert_eq!(again.max.to_bits(), first.max.to_bits());
            prop_assert_eq!(again.delta.to_bits(), first.delta.to_bits());
            prop_assert_eq!(again.offset, first.offset);
        }
        prop_assert_eq!(analyzer.accumulated_stats(), stats);
    }
}

// Property 5: Strict + unsigned under symmetric mode is always rejected
proptest! {
    #[test]
    fn prop_conflicting_modes_always_rejected(batches in batches(), bitwidth in 0u8..=64) {
        let analyzer = analyzer_over(&batches);
        let result = analyzer.compute_encoding(bitwidth, true, true, true);
        prop_assert!(matches!(result, Err(QuantError::ConflictingSymmetricModes)));
    }
}

fn wide_f64_batches() -> impl Strategy<Value = Vec<Vec<f64>>> {
    let value = prop_oneof![
        -1000.0f64..1000.0,
        prop::num::f64::NORMAL,
        Just(f64::MAX),
        Just(-f64::MAX),
    ];
    prop::collection::vec(prop::collection::vec(value, 0..20), 1..6)
}

// Property 6: f64 data anywhere in range yields a usable encoding or InvalidRange
proptest! {
    #[test]
    fn prop_wide_f64_ranges_never_produce_nan(
        batches in wide_f64_batches(),
        bitwidth in 1u8..=32,
        (sym, strict, unsigned) in modes()
    ) {
        prop_assume!(!sym || bitwidth >= 2);
        let mut analyzer = MinMaxEncodingAnalyzer::<f64>::new();
        for batch in &batches {
            analyzer.update_stats(batch, ComputationMode::Cpu);
        }

        match analyzer.compute_encoding(bitwidth, sym, strict, unsigned) {
            Ok(enc) => {
                prop_assert!(enc.min.is_finite() && enc.max.is_finite());
                prop_assert!(enc.delta > 0.0 && enc.delta.is_finite());
                prop_assert!(enc.min <= 0.0 && enc.max >= 0.0);
                prop_assert_eq!(enc.dequantize(enc.quantize(0.0)), 0.0);
            }
            Err(err) => {
                let is_invalid_range = matches!(err, QuantError::InvalidRange { .. });
                prop_assert!(is_invalid_range);
            }
        }
    }
}

#[test]
fn test_analyzer_logs_under_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("qenc_quant=debug,qenc_core=debug")
        .with_test_writer()
        .try_init();

    let mut analyzer = MinMaxEncodingAnalyzer::<f64>::new();
    analyzer.update_stats(&[], ComputationMode::Gpu);
    analyzer.update_stats(&[-0.25, 0.75], ComputationMode::Gpu);

    let enc = analyzer.compute_encoding(8, true, true, false).unwrap();
    assert_eq!(enc.offset, 127);
    assert!(analyzer.is_stats_updated());
}
