//! Computation Mode - Reduction Execution Path Selection
//!
//! Selects where the element-wise min/max reduction over a tensor runs. The
//! mode is a pass-through value: analyzers receive it with every update and
//! hand it to the reduction backend without keeping it.
//!
//! # Example
//! ```rust
//! use qenc_core::ComputationMode;
//!
//! let mode = ComputationMode::default();
//! assert!(mode.is_cpu());
//! assert!(mode.is_available());
//!
//! let gpu: ComputationMode = "cuda".parse().unwrap();
//! assert_eq!(gpu, ComputationMode::Gpu);
//! ```
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// =============================================================================
// ComputationMode Enum
// =============================================================================

/// Execution path used by the min/max reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComputationMode {
    /// Reduce on the host CPU.
    #[default]
    Cpu,

    /// Reduce on an accelerator.
    #[serde(alias = "cuda", alias = "accelerated")]
    Gpu,
}

impl ComputationMode {
    /// Returns true if this mode always runs with its native backend here.
    ///
    /// No device backend is compiled into this build, so `Gpu` reductions run
    /// on the CPU thread pool instead; see [`crate::AcceleratedBackend`].
    #[must_use]
    pub const fn is_available(self) -> bool {
        match self {
            Self::Cpu => true,
            Self::Gpu => false,
        }
    }

    /// Returns true if this is the CPU mode.
    #[must_use]
    pub const fn is_cpu(self) -> bool {
        matches!(self, Self::Cpu)
    }

    /// Returns true if this is the GPU-accelerated mode.
    #[must_use]
    pub const fn is_gpu(self) -> bool {
        !self.is_cpu()
    }

    /// Returns the name of this mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
        }
    }
}

impl fmt::Display for ComputationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ComputationMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "gpu" | "cuda" | "accelerated" => Ok(Self::Gpu),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
