//! qenc Quant - Encoding Analysis for Fixed-Point Quantization
//!
//! Observes a stream of floating point tensor samples, accumulates summary
//! statistics across it, and derives quantization encodings (bit-width, min,
//! max, scale and zero offset) that map the observed range onto an integer
//! grid.
//!
//! - **Asymmetric**: grid spans the observed range, shifted so zero is exact
//! - **Symmetric**: grid centered on zero
//! - **Strict symmetric**: symmetric with the most negative code unused
//! - **Unsigned symmetric**: symmetric over non-negative data only
//!
//! # Example
//! ```
//! use qenc_core::ComputationMode;
//! use qenc_quant::{EncodingAnalyzer, MinMaxEncodingAnalyzer};
//!
//! let mut analyzer = MinMaxEncodingAnalyzer::<f32>::new();
//! analyzer.update_stats(&[1.0, 2.0, 3.0], ComputationMode::Cpu);
//! analyzer.update_stats(&[0.5, 10.0], ComputationMode::Cpu);
//!
//! let encoding = analyzer.compute_encoding(8, false, false, false)?;
//! assert_eq!(encoding.bitwidth, 8);
//! assert_eq!(encoding.min, 0.0);
//! # Ok::<(), qenc_quant::QuantError>(())
//! ```
//!
//! @version 0.1.0
//! @author `qenc` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::fn_params_excessive_bools)]

pub mod analyzer;
pub mod calibration;
pub mod config;
pub mod encoding;
pub mod error;
pub mod quantize;
pub mod types;

pub use analyzer::{EncodingAnalyzer, MinMaxEncodingAnalyzer};
pub use calibration::{calibrate, calibrate_named, calibrate_parallel};
pub use config::EncodingConfig;
pub use encoding::derive_encoding;
pub use error::{QuantError, QuantResult};
pub use quantize::{dequantize_slice, quantization_mse, quantize_dequantize, quantize_slice};
pub use types::{AccumulatedStats, TfEncoding};

// =============================================================================
// Constants
// =============================================================================

/// Narrowest range an encoding may cover.
pub const MIN_RANGE: f64 = 0.01;

/// Default bit-width for encodings.
pub const DEFAULT_BITWIDTH: u8 = 8;

/// Smallest supported bit-width.
pub const MIN_BITWIDTH: u8 = 1;

/// Largest supported bit-width.
pub const MAX_BITWIDTH: u8 = 32;

// =============================================================================
// Tests
// =============================================================================
