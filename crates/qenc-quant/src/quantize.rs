//! Applying Encodings
//!
//! Functions that push tensor data through a computed [`TfEncoding`]. Used to
//! materialize codes and to measure the noise an encoding introduces.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use qenc_core::Float;
use rayon::prelude::*;

use crate::types::TfEncoding;

/// Threshold for using parallel processing (in elements)
const PARALLEL_THRESHOLD: usize = 4096;

// =============================================================================
// Public API
// =============================================================================

/// Quantizes every element of `data` to its code under `encoding`.
///
/// # Example
/// ```
/// use qenc_quant::{quantize_slice, TfEncoding};
///
/// let enc = TfEncoding { bitwidth: 8, min: 0.0, max: 2.55, delta: 0.01, offset: 0 };
/// assert_eq!(quantize_slice(&[0.0_f32, 1.0, 9.0], &enc), vec![0, 100, 255]);
/// ```
pub fn quantize_slice<T: Float>(data: &[T], encoding: &TfEncoding) -> Vec<i64> {
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter()
            .map(|x| encoding.quantize(x.to_f64_lossless()))
            .collect()
    } else {
        data.iter()
            .map(|x| encoding.quantize(x.to_f64_lossless()))
            .collect()
    }
}

/// Maps codes back to values of the element type `T`.
pub fn dequantize_slice<T: Float>(codes: &[i64], encoding: &TfEncoding) -> Vec<T> {
    if codes.len() >= PARALLEL_THRESHOLD {
        codes
            .par_iter()
            .map(|&q| T::from_f64_lossy(encoding.dequantize(q)))
            .collect()
    } else {
        codes
            .iter()
            .map(|&q| T::from_f64_lossy(encoding.dequantize(q)))
            .collect()
    }
}

/// Quantizes and immediately dequantizes `data`, returning the values the
/// quantized tensor would represent.
pub fn quantize_dequantize<T: Float>(data: &[T], encoding: &TfEncoding) -> Vec<T> {
    let round_trip = |x: &T| {
        let q = encoding.quantize(x.to_f64_lossless());
        T::from_f64_lossy(encoding.dequantize(q))
    };

    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter().map(round_trip).collect()
    } else {
        data.iter().map(round_trip).collect()
    }
}

/// Mean squared error between `data` and its quantize-dequantize image.
///
/// Returns 0 for empty input.
pub fn quantization_mse<T: Float>(data: &[T], encoding: &TfEncoding) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let squared_error = |x: &T| {
        let x = x.to_f64_lossless();
        let err = x - encoding.dequantize(encoding.quantize(x));
        err * err
    };

    let total: f64 = if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter().map(squared_error).sum()
    } else {
        data.iter().map(squared_error).sum()
    };
    total / data.len() as f64
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::derive_encoding;

    #[test]
    fn test_quantize_asymmetric() {
        let enc = derive_encoding(8, -1.0, 1.0, false, false, false).unwrap();
        let codes = quantize_slice(&[-5.0_f32, 0.0, 0.5, 5.0], &enc);

        assert_eq!(codes[0], 0);
        assert_eq!(codes[1], enc.offset);
        assert!(codes[2] > enc.offset && codes[2] < 255);
        assert_eq!(codes[3], 255);
    }

    #[test]
    fn test_dequantize_roundtrip_of_codes() {
        let enc = derive_encoding(8, -2.0, 6.0, false, false, false).unwrap();
        let codes: Vec<i64> = (0..=255).collect();
        let values: Vec<f64> = dequantize_slice(&codes, &enc);

        assert_eq!(quantize_slice(&values, &enc), codes);
    }

    #[test]
    fn test_quantize_dequantize_error_bound() {
        let enc = derive_encoding(8, -3.0, 3.0, true, false, false).unwrap();
        let data: Vec<f32> = (0..10_000).map(|i| (i as f32 / 10_000.0) * 6.0 - 3.0).collect();
        let qdq = quantize_dequantize(&data, &enc);

        assert_eq!(qdq.len(), data.len());
        let half_step = (enc.delta / 2.0) as f32 + 1e-6;
        for (x, y) in data.iter().zip(&qdq) {
            assert!((x - y).abs() <= half_step);
        }
    }

    #[test]
    fn test_mse_shrinks_with_bitwidth() {
        let data: Vec<f64> = (0..500).map(|i| (f64::from(i) * 0.13).sin()).collect();
        let coarse = derive_encoding(4, -1.0, 1.0, false, false, false).unwrap();
        let fine = derive_encoding(8, -1.0, 1.0, false, false, false).unwrap();

        assert!(quantization_mse(&data, &fine) < quantization_mse(&data, &coarse));
        assert_eq!(quantization_mse::<f64>(&[], &fine), 0.0);
    }
}
