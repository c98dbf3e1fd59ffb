//! Encoding Analyzers
//!
//! An analyzer runs in two phases. During accumulation `update_stats` folds
//! each calibration sample into running statistics; afterwards
//! `compute_encoding` derives an encoding from those statistics as many times
//! as needed, with different bit-widths or modes, without touching them.
//!
//! [`EncodingAnalyzer`] is the capability set shared by every analyzer
//! variant. [`MinMaxEncodingAnalyzer`] is the variant that keeps only the
//! running minimum and maximum.
//!
//! Analyzers hold no locks. Give each calibration worker its own analyzer
//! and combine them with [`MinMaxEncodingAnalyzer::merge`].
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use std::marker::PhantomData;

use qenc_core::{get_max, get_min, ComputationMode, Float};

use crate::config::EncodingConfig;
use crate::encoding::{check_symmetric_modes, derive_encoding};
use crate::error::{QuantError, QuantResult};
use crate::types::{AccumulatedStats, TfEncoding};
use crate::MIN_RANGE;

// =============================================================================
// Analyzer Trait
// =============================================================================

/// Capability set shared by all encoding analyzer variants.
pub trait EncodingAnalyzer<T: Float> {
    /// Folds the statistics of one tensor sample into the analyzer.
    fn update_stats(&mut self, tensor: &[T], mode: ComputationMode);

    /// Derives an encoding from the statistics accumulated so far.
    ///
    /// `use_strict_symmetric` and `use_unsigned_symmetric` refine symmetric
    /// mode and may not both be set while `use_symmetric` is.
    fn compute_encoding(
        &self,
        bitwidth: u8,
        use_symmetric: bool,
        use_strict_symmetric: bool,
        use_unsigned_symmetric: bool,
    ) -> QuantResult<TfEncoding>;

    /// Returns the bucketed histogram behind the statistics as
    /// `(bucket_start, count)` pairs, for variants that keep one.
    fn stats_histogram(&self) -> QuantResult<Vec<(f64, f64)>>;

    /// Returns true once `update_stats` has been called.
    fn is_stats_updated(&self) -> bool;
}

// =============================================================================
// Min/Max Analyzer
// =============================================================================

/// Analyzer that tracks the running minimum and maximum of every sample.
#[derive(Debug, Clone)]
pub struct MinMaxEncodingAnalyzer<T: Float> {
    stats: AccumulatedStats,
    stats_updated: bool,
    _element: PhantomData<T>,
}

impl<T: Float> MinMaxEncodingAnalyzer<T> {
    /// Creates an analyzer with no observed data.
    pub fn new() -> Self {
        Self {
            stats: AccumulatedStats::new(),
            stats_updated: false,
            _element: PhantomData,
        }
    }

    /// Returns the statistics accumulated so far.
    pub fn accumulated_stats(&self) -> AccumulatedStats {
        self.stats
    }

    /// Folds another analyzer's statistics into this one.
    pub fn merge(&mut self, other: &Self) {
        self.stats.merge(&other.stats);
        self.stats_updated |= other.stats_updated;
    }

    /// Derives an encoding using the bit-width and modes of `config`.
    pub fn encoding_with(&self, config: &EncodingConfig) -> QuantResult<TfEncoding> {
        self.compute_encoding(
            config.bitwidth,
            config.use_symmetric,
            config.use_strict_symmetric,
            config.use_unsigned_symmetric,
        )
    }
}

impl<T: Float> Default for MinMaxEncodingAnalyzer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> EncodingAnalyzer<T> for MinMaxEncodingAnalyzer<T> {
    /// Marks the analyzer as updated even when `tensor` is empty. An empty
    /// sample leaves the statistics themselves unchanged.
    fn update_stats(&mut self, tensor: &[T], mode: ComputationMode) {
        self.stats_updated = true;
        if tensor.is_empty() {
            tracing::warn!(dtype = %T::DTYPE, %mode, "update_stats called with an empty tensor");
        }

        let current_min = get_min(tensor, mode);
        let current_max = get_max(tensor, mode);
        self.stats.observe(current_min, current_max);

        tracing::debug!(
            dtype = %T::DTYPE,
            %mode,
            len = tensor.len(),
            current_min,
            current_max,
            min = self.stats.min,
            max = self.stats.max,
            "updated min/max stats"
        );
    }

    fn compute_encoding(
        &self,
        bitwidth: u8,
        use_symmetric: bool,
        use_strict_symmetric: bool,
        use_unsigned_symmetric: bool,
    ) -> QuantResult<TfEncoding> {
        check_symmetric_modes(use_symmetric, use_strict_symmetric, use_unsigned_symmetric)?;

        // Zero must be representable.
        let new_min = self.stats.min.min(0.0);
        let new_max = self.stats.max.max(0.0);
        // Floor the width so min == max (all-zero samples included) still
        // yields a finite delta.
        let new_max = new_max.max(new_min + MIN_RANGE);

        let mut encoding = derive_encoding(
            bitwidth,
            new_min,
            new_max,
            use_symmetric,
            use_strict_symmetric,
            use_unsigned_symmetric,
        )?;
        encoding.bitwidth = bitwidth;

        tracing::debug!(
            bitwidth,
            use_symmetric,
            min = encoding.min,
            max = encoding.max,
            delta = encoding.delta,
            offset = encoding.offset,
            "computed min/max encoding"
        );
        Ok(encoding)
    }

    /// Always fails: this variant keeps two scalars, not a histogram.
    fn stats_histogram(&self) -> QuantResult<Vec<(f64, f64)>> {
        Err(QuantError::Unsupported {
            analyzer: "MinMaxEncodingAnalyzer",
            operation: "stats_histogram",
        })
    }

    fn is_stats_updated(&self) -> bool {
        self.stats_updated
    }
}

// =============================================================================
// Tests
// =============================================================================
