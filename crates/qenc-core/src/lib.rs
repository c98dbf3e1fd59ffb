//! qenc Core - Foundation Layer for Encoding Analysis
//!
//! This crate provides the low-level pieces the encoding analyzers are built
//! on: the floating-point element types a calibration tensor may hold, the
//! computation mode that selects where reductions run, and the min/max
//! reduction backends themselves.
//!
//! # Key Features
//! - Type-safe element system over f32 and f64
//! - Computation mode abstraction (CPU, GPU-accelerated)
//! - Total min/max reductions with documented empty-input behaviour
//!
//! # Example
//! ```rust
//! use qenc_core::{get_max, get_min, ComputationMode};
//!
//! let data = [1.0_f32, -2.0, 3.5];
//! assert_eq!(get_min(&data, ComputationMode::Cpu), -2.0);
//! assert_eq!(get_max(&data, ComputationMode::Cpu), 3.5);
//! ```
//!
//! @version 0.1.0
//! @author `qenc` Development Team

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Numeric allowances
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

// =============================================================================
// Modules
// =============================================================================

pub mod backends;
pub mod dtype;
pub mod error;
pub mod mode;

// =============================================================================
// Re-exports
// =============================================================================

pub use backends::{get_max, get_min, AcceleratedBackend, Backend, CpuBackend};
pub use dtype::{DType, Float, Scalar};
pub use error::{Error, Result};
pub use mode::ComputationMode;

// =============================================================================
// Prelude
// =============================================================================

/// Convenient imports for common usage.
pub mod prelude {
    pub use crate::backends::{get_max, get_min, Backend};
    pub use crate::dtype::{DType, Float, Scalar};
    pub use crate::error::{Error, Result};
    pub use crate::mode::ComputationMode;
}
