//! Quantization Error Types
//!
//! Error types for encoding analysis. None of these describe bad data: numeric
//! degeneracy is resolved by the analyzers themselves. They describe callers
//! asking for something a configuration or analyzer cannot provide.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use thiserror::Error;

/// Result type for quantization operations.
pub type QuantResult<T> = Result<T, QuantError>;

/// Errors that can occur during encoding analysis.
#[derive(Error, Debug)]
pub enum QuantError {
    /// The analyzer variant does not provide the requested capability.
    #[error("{analyzer} does not support {operation}")]
    Unsupported {
        /// Name of the analyzer variant.
        analyzer: &'static str,
        /// The capability that was requested.
        operation: &'static str,
    },

    /// Strict and unsigned symmetric refinements requested together.
    #[error("Strict symmetric and unsigned symmetric encodings are mutually exclusive")]
    ConflictingSymmetricModes,

    /// Bit-width outside the supported range.
    #[error("Invalid bitwidth: {0}")]
    InvalidBitwidth(u8),

    /// Range handed to encoding derivation is unusable.
    #[error("Invalid encoding range: [{min}, {max}]")]
    InvalidRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file parse error.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Core layer error.
    #[error(transparent)]
    Core(#[from] qenc_core::Error),
}

// =============================================================================
// Tests
// =============================================================================
