//! CPU Backend - Host Reductions
//!
//! Provides the CPU implementation of the min/max reductions. This is the
//! default backend and is always available.
//!
//! # Key Features
//! - Sequential fold for small inputs
//! - Multi-threaded execution via rayon above `PARALLEL_THRESHOLD`
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use rayon::prelude::*;

use super::{fold_max, fold_min, Backend};
use crate::dtype::Float;

/// Threshold for using parallel processing (in elements)
const PARALLEL_THRESHOLD: usize = 4096;

// =============================================================================
// CPU Backend Struct
// =============================================================================

/// CPU backend for min/max reductions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpuBackend;

impl CpuBackend {
    /// Creates a new CPU backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

// =============================================================================
// Backend Trait Implementation
// =============================================================================

impl Backend for CpuBackend {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn is_available(&self) -> bool {
        true // CPU is always available
    }

    fn reduce_min<T: Float>(&self, data: &[T]) -> f64 {
        if data.len() >= PARALLEL_THRESHOLD {
            data.par_iter()
                .map(|v| v.to_f64_lossless())
                .reduce(|| f64::INFINITY, f64::min)
        } else {
            fold_min(data)
        }
    }

    fn reduce_max<T: Float>(&self, data: &[T]) -> f64 {
        if data.len() >= PARALLEL_THRESHOLD {
            data.par_iter()
                .map(|v| v.to_f64_lossless())
                .reduce(|| f64::NEG_INFINITY, f64::max)
        } else {
            fold_max(data)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
