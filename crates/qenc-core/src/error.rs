//! Error Types - qenc Core Error Handling
//!
//! Error types for the core layer. Reductions themselves are total and never
//! fail; what can go wrong here is turning user input into core types.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

/// The main error type for qenc core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A computation mode name that does not parse.
    #[error("Unknown computation mode: '{0}'")]
    UnknownMode(String),

    /// A dtype name that does not parse, or names a non-float type.
    #[error("Unsupported dtype: '{0}'")]
    UnsupportedDType(String),
}

// =============================================================================
// Result Type
// =============================================================================

/// A specialized Result type for qenc core operations.
pub type Result<T> = core::result::Result<T, Error>;

// =============================================================================
// Tests
// =============================================================================
