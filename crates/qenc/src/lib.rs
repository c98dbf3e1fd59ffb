//! # qenc - Quantization Encoding Analysis
//!
//! qenc accumulates statistics over calibration samples of a tensor and
//! derives the fixed-point encodings a quantized model uses for it.
//!
//! ## Core Features
//!
//! - **Analyzers**: two-phase accumulate/compute protocol behind the `EncodingAnalyzer` trait
//! - **Min/Max statistics**: order-independent running range, mergeable across workers
//! - **Encodings**: asymmetric, symmetric, strict symmetric and unsigned symmetric grids
//! - **Reductions**: CPU and accelerated computation modes
//! - **Calibration**: sequential, parallel and per-tensor drivers configured from TOML
//!
//! # Quick Start
//!
//! ```
//! use qenc::prelude::*;
//!
//! let mut analyzer = MinMaxEncodingAnalyzer::<f32>::new();
//! for batch in [[-0.5_f32, 1.5], [0.25, 3.0]] {
//!     analyzer.update_stats(&batch, ComputationMode::Cpu);
//! }
//!
//! let encoding = analyzer.compute_encoding(8, true, false, false)?;
//! let codes = quantize_slice(&[0.0_f32, 3.0], &encoding);
//! assert_eq!(codes, vec![encoding.offset, 255]);
//! # Ok::<(), QuantError>(())
//! ```
//!
//! @version 0.1.0
//! @author `qenc` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]

// =============================================================================
// Re-exports
// =============================================================================

pub use qenc_core as core;
pub use qenc_quant as quant;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    // Core types
    pub use qenc_core::{ComputationMode, DType, Float};

    // Analysis
    pub use qenc_quant::{
        calibrate, calibrate_named, calibrate_parallel, AccumulatedStats, EncodingAnalyzer,
        EncodingConfig, MinMaxEncodingAnalyzer, QuantError, QuantResult, TfEncoding, MIN_RANGE,
    };

    // Applying encodings
    pub use qenc_quant::{dequantize_slice, quantization_mse, quantize_dequantize, quantize_slice};
}

// =============================================================================
// Tests
// =============================================================================
