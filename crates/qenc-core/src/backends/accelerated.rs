//! Accelerated Backend - Data-Parallel Reductions
//!
//! Serves `ComputationMode::Gpu`. No device runtime is linked into this
//! build, so the reduction is executed as a chunked tree reduction over the
//! whole rayon thread pool. Results are identical to the CPU backend: min and
//! max are exact, order-independent reductions.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use std::sync::Once;

use rayon::prelude::*;

use super::{fold_max, fold_min, Backend};
use crate::dtype::Float;

/// Elements reduced by one task before partial results are combined.
const CHUNK_SIZE: usize = 1024;

static FALLBACK_NOTICE: Once = Once::new();

// =============================================================================
// Accelerated Backend Struct
// =============================================================================

/// Backend for the GPU-accelerated computation mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceleratedBackend;

impl AcceleratedBackend {
    /// Creates a new accelerated backend.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn notice_fallback() {
        FALLBACK_NOTICE.call_once(|| {
            tracing::warn!(
                threads = rayon::current_num_threads(),
                "no accelerator backend compiled in; gpu reductions run on the cpu thread pool"
            );
        });
    }
}

// =============================================================================
// Backend Trait Implementation
// =============================================================================

impl Backend for AcceleratedBackend {
    fn name(&self) -> &'static str {
        "accelerated"
    }

    fn is_available(&self) -> bool {
        false
    }

    fn reduce_min<T: Float>(&self, data: &[T]) -> f64 {
        Self::notice_fallback();
        data.par_chunks(CHUNK_SIZE)
            .map(fold_min)
            .reduce(|| f64::INFINITY, f64::min)
    }

    fn reduce_max<T: Float>(&self, data: &[T]) -> f64 {
        Self::notice_fallback();
        data.par_chunks(CHUNK_SIZE)
            .map(fold_max)
            .reduce(|| f64::NEG_INFINITY, f64::max)
    }
}

// =============================================================================
// Tests
// =============================================================================
