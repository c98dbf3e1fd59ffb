//! Backends - Min/Max Reduction Implementations
//!
//! This module contains the reduction backends that compute the minimum and
//! maximum of a tensor sample. The analyzers only ever call [`get_min`] and
//! [`get_max`]; which backend runs is chosen by the [`ComputationMode`].
//!
//! # Available Backends
//! - `cpu` - CPU backend (always available)
//! - `accelerated` - data-parallel backend serving `ComputationMode::Gpu`
//!
//! # Reduction Contract
//!
//! Reductions are total over the slice and return f64 regardless of the
//! element type. An empty slice reduces to the identity of the merge:
//! `+inf` for the minimum and `-inf` for the maximum, so folding an empty
//! sample into accumulated statistics leaves them unchanged. NaN elements are
//! skipped; a slice holding only NaN reduces like an empty one.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use crate::dtype::Float;
use crate::mode::ComputationMode;

// =============================================================================
// Backend Modules
// =============================================================================

pub mod accelerated;
pub mod cpu;

// =============================================================================
// Re-exports
// =============================================================================

pub use accelerated::AcceleratedBackend;
pub use cpu::CpuBackend;

// =============================================================================
// Backend Trait
// =============================================================================

/// Common trait for all reduction backends.
pub trait Backend: Send + Sync {
    /// Returns the name of this backend.
    fn name(&self) -> &'static str;

    /// Returns whether this backend runs natively on the current system.
    fn is_available(&self) -> bool;

    /// Returns the smallest non-NaN element, or `+inf` if there is none.
    fn reduce_min<T: Float>(&self, data: &[T]) -> f64;

    /// Returns the largest non-NaN element, or `-inf` if there is none.
    fn reduce_max<T: Float>(&self, data: &[T]) -> f64;
}

// =============================================================================
// Dispatch
// =============================================================================

/// Computes the minimum of `data` on the backend selected by `mode`.
pub fn get_min<T: Float>(data: &[T], mode: ComputationMode) -> f64 {
    match mode {
        ComputationMode::Cpu => CpuBackend::new().reduce_min(data),
        ComputationMode::Gpu => AcceleratedBackend::new().reduce_min(data),
    }
}

/// Computes the maximum of `data` on the backend selected by `mode`.
pub fn get_max<T: Float>(data: &[T], mode: ComputationMode) -> f64 {
    match mode {
        ComputationMode::Cpu => CpuBackend::new().reduce_max(data),
        ComputationMode::Gpu => AcceleratedBackend::new().reduce_max(data),
    }
}

/// Sequential fold shared by the backends for small inputs and per chunk.
pub(crate) fn fold_min<T: Float>(data: &[T]) -> f64 {
    data.iter()
        .fold(f64::INFINITY, |acc, &v| acc.min(v.to_f64_lossless()))
}

/// Sequential fold shared by the backends for small inputs and per chunk.
pub(crate) fn fold_max<T: Float>(data: &[T]) -> f64 {
    data.iter()
        .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v.to_f64_lossless()))
}

// =============================================================================
// Tests
// =============================================================================
