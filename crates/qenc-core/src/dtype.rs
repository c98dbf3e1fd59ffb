//! Data Types - qenc Element Type System
//!
//! Defines the element types a calibration tensor may hold and the traits the
//! analyzers are generic over. Only floating point types are analyzed: the
//! statistics and encodings are computed in f64 regardless of the element
//! width, so f32 and f64 tensors share one implementation.
//!
//! # Key Features
//! - Runtime dtype information via `DType` enum
//! - `Float` trait implemented for f32 and f64
//! - Lossless widening to f64 for accumulation
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use core::fmt::Debug;
use core::str::FromStr;

use num_traits::Float as NumFloat;

use crate::error::Error;

// =============================================================================
// DType Enum
// =============================================================================

/// Runtime representation of analyzable element types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point (single precision).
    F32,
    /// 64-bit floating point (double precision).
    F64,
}

impl DType {
    /// Returns the size in bytes of this data type.
    #[must_use]
    pub const fn size_of(self) -> usize {
        match self {
            Self::F32 => 4,
            Self::F64 => 8,
        }
    }

    /// Returns the name of this data type as a string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

impl Default for DType {
    fn default() -> Self {
        Self::F32
    }
}

impl core::fmt::Display for DType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "f32" | "float" | "float32" => Ok(Self::F32),
            "f64" | "double" | "float64" => Ok(Self::F64),
            _ => Err(Error::UnsupportedDType(s.to_string())),
        }
    }
}

// =============================================================================
// Scalar Trait
// =============================================================================

/// Trait for all element types a tensor sample can hold.
pub trait Scalar: Copy + Clone + Debug + Default + Send + Sync + 'static {
    /// The runtime dtype for this scalar type.
    const DTYPE: DType;

    /// Returns the dtype for this type.
    #[must_use]
    fn dtype() -> DType {
        Self::DTYPE
    }
}

// =============================================================================
// Float Trait
// =============================================================================

/// Trait for floating point element types the analyzers accept.
pub trait Float: Scalar + NumFloat + PartialOrd {
    /// Widens this value to f64.
    fn to_f64_lossless(self) -> f64;

    /// Narrows an f64 into this type, rounding to nearest.
    fn from_f64_lossy(value: f64) -> Self;
}

// =============================================================================
// Implementations
// =============================================================================

macro_rules! impl_float {
    ($ty:ty, $dtype:expr) => {
        impl Scalar for $ty {
            const DTYPE: DType = $dtype;
        }

        impl Float for $ty {
            fn to_f64_lossless(self) -> f64 {
                <f64 as From<$ty>>::from(self)
            }

            fn from_f64_lossy(value: f64) -> Self {
                value as $ty
            }
        }
    };
}

impl_float!(f32, DType::F32);
impl_float!(f64, DType::F64);

// =============================================================================
// Tests
// =============================================================================
