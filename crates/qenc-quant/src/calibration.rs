//! Calibration
//!
//! Drives min/max analyzers over calibration batches and returns the
//! resulting encodings.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use qenc_core::Float;
use rayon::prelude::*;

use crate::analyzer::{EncodingAnalyzer, MinMaxEncodingAnalyzer};
use crate::config::EncodingConfig;
use crate::error::{QuantError, QuantResult};
use crate::types::TfEncoding;

// =============================================================================
// Calibration Methods
// =============================================================================

/// Feeds `batches` in order to one analyzer and returns its encoding.
///
/// # Arguments
/// * `batches` - Calibration samples of one tensor
/// * `config` - Bit-width, modes and computation mode to use
pub fn calibrate<T: Float>(batches: &[&[T]], config: &EncodingConfig) -> QuantResult<TfEncoding> {
    config.validate()?;

    let mut analyzer = MinMaxEncodingAnalyzer::<T>::new();
    for batch in batches {
        analyzer.update_stats(batch, config.computation_mode);
    }
    analyzer.encoding_with(config)
}

/// Like [`calibrate`], but splits `batches` across the rayon pool with one
/// analyzer per task and merges the analyzers afterwards.
///
/// Min/max merging is order independent, so the result equals the
/// sequential one.
pub fn calibrate_parallel<T: Float>(
    batches: &[&[T]],
    config: &EncodingConfig,
) -> QuantResult<TfEncoding> {
    config.validate()?;

    let analyzer = batches
        .par_iter()
        .fold(MinMaxEncodingAnalyzer::<T>::new, |mut analyzer, batch| {
            analyzer.update_stats(batch, config.computation_mode);
            analyzer
        })
        .reduce(MinMaxEncodingAnalyzer::<T>::new, |mut left, right| {
            left.merge(&right);
            left
        });
    analyzer.encoding_with(config)
}

/// Calibrates several named tensors independently.
///
/// # Returns
/// One `(name, encoding)` pair per input, in input order
pub fn calibrate_named<T: Float>(
    tensors: &[(&str, &[&[T]])],
    config: &EncodingConfig,
) -> QuantResult<Vec<(String, TfEncoding)>> {
    if tensors.is_empty() {
        return Err(QuantError::Config("No tensors provided".to_string()));
    }

    let encodings = tensors
        .par_iter()
        .map(|(name, batches)| {
            let encoding = calibrate(batches, config)?;
            tracing::debug!(tensor = %name, %encoding, "calibrated tensor");
            Ok((name.to_string(), encoding))
        })
        .collect::<QuantResult<Vec<_>>>()?;

    tracing::info!(tensors = encodings.len(), bitwidth = config.bitwidth, "calibration complete");
    Ok(encodings)
}

// =============================================================================
// Tests
// =============================================================================
