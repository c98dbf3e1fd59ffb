//! Encoding Derivation
//!
//! Turns a zero-inclusive, non-degenerate range and a bit-width into the
//! scale/offset pair of a [`TfEncoding`]. The analyzers prepare the range;
//! this module only fits the integer grid onto it.
//!
//! With `num_steps = 2^bw - 1` the supported grids are:
//!
//! | mode               | delta                    | offset (zero code) | codes used          |
//! |--------------------|--------------------------|--------------------|---------------------|
//! | asymmetric         | `(max - min) / num_steps`| `-round(min/delta)`| `0..=num_steps`     |
//! | symmetric          | `abs_max / pos`          | `pos + 1`          | `0..=num_steps`     |
//! | strict symmetric   | `abs_max / pos`          | `pos`              | `0..=num_steps - 1` |
//! | unsigned symmetric | `max / num_steps`        | `0`                | `0..=num_steps`     |
//!
//! where `pos = floor(num_steps / 2)` is the number of positive steps and
//! `abs_max = max(|min|, |max|)`. Unsigned symmetric only applies when the
//! range has no negative part; otherwise it falls back to signed symmetric.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use crate::error::{QuantError, QuantResult};
use crate::types::{num_steps, TfEncoding};
use crate::{MAX_BITWIDTH, MIN_BITWIDTH};

// =============================================================================
// Public API
// =============================================================================

/// Derives the encoding that fits a `bitwidth`-bit grid onto `[min, max]`.
///
/// # Arguments
/// * `bitwidth` - Bits per code, `1..=32` (`2..=32` for symmetric grids)
/// * `min`, `max` - Finite range with `min <= 0 <= max` and `min < max`
/// * `use_symmetric` - Center the grid on zero
/// * `use_strict_symmetric` - Symmetric refinement leaving the most negative code unused
/// * `use_unsigned_symmetric` - Symmetric refinement using only non-negative values
///
/// The two refinements are ignored unless `use_symmetric` is set, and may
/// not be combined. A range whose grid endpoints or step do not fit in f64
/// is rejected with [`QuantError::InvalidRange`].
pub fn derive_encoding(
    bitwidth: u8,
    min: f64,
    max: f64,
    use_symmetric: bool,
    use_strict_symmetric: bool,
    use_unsigned_symmetric: bool,
) -> QuantResult<TfEncoding> {
    check_symmetric_modes(use_symmetric, use_strict_symmetric, use_unsigned_symmetric)?;
    validate_bitwidth(bitwidth, use_symmetric)?;
    validate_range(min, max)?;

    let encoding = if !use_symmetric {
        asymmetric(bitwidth, min, max)
    } else if use_unsigned_symmetric && min >= 0.0 {
        unsigned_symmetric(bitwidth, max)
    } else {
        signed_symmetric(bitwidth, min, max, use_strict_symmetric)
    };
    check_grid(encoding, min, max)
}

/// Rejects strict and unsigned symmetric refinements requested together.
pub fn check_symmetric_modes(
    use_symmetric: bool,
    use_strict_symmetric: bool,
    use_unsigned_symmetric: bool,
) -> QuantResult<()> {
    if use_symmetric && use_strict_symmetric && use_unsigned_symmetric {
        return Err(QuantError::ConflictingSymmetricModes);
    }
    Ok(())
}

/// Checks that `bitwidth` can carry the requested grid.
pub fn validate_bitwidth(bitwidth: u8, use_symmetric: bool) -> QuantResult<()> {
    // A symmetric grid needs at least one positive step.
    let lowest = if use_symmetric { MIN_BITWIDTH + 1 } else { MIN_BITWIDTH };
    if (lowest..=MAX_BITWIDTH).contains(&bitwidth) {
        Ok(())
    } else {
        Err(QuantError::InvalidBitwidth(bitwidth))
    }
}

// =============================================================================
// Grids
// =============================================================================

fn validate_range(min: f64, max: f64) -> QuantResult<()> {
    let usable = min.is_finite() && max.is_finite() && min <= 0.0 && max >= 0.0 && min < max;
    if usable {
        Ok(())
    } else {
        Err(QuantError::InvalidRange { min, max })
    }
}

// Ranges near the ends of f64 can overflow once snapped to the grid.
fn check_grid(encoding: TfEncoding, min: f64, max: f64) -> QuantResult<TfEncoding> {
    let finite = encoding.delta.is_finite()
        && encoding.delta > 0.0
        && encoding.min.is_finite()
        && encoding.max.is_finite();
    if finite {
        Ok(encoding)
    } else {
        Err(QuantError::InvalidRange { min, max })
    }
}

fn asymmetric(bitwidth: u8, min: f64, max: f64) -> TfEncoding {
    let steps = num_steps(bitwidth) as f64;
    // `max - min` overflows for finite ranges wider than f64::MAX.
    let delta = max / steps - min / steps;
    // Shift the grid so zero lands exactly on a code.
    let offset = (-min / delta).round() as i64;

    TfEncoding {
        bitwidth,
        min: (-offset) as f64 * delta,
        max: (num_steps(bitwidth) - offset) as f64 * delta,
        delta,
        offset,
    }
}

fn signed_symmetric(bitwidth: u8, min: f64, max: f64, strict: bool) -> TfEncoding {
    let positive_steps = num_steps(bitwidth) / 2;
    let abs_max = max.max(-min);
    let delta = abs_max / positive_steps as f64;
    let offset = if strict {
        positive_steps
    } else {
        positive_steps + 1
    };

    TfEncoding {
        bitwidth,
        min: (-offset) as f64 * delta,
        max: positive_steps as f64 * delta,
        delta,
        offset,
    }
}

fn unsigned_symmetric(bitwidth: u8, max: f64) -> TfEncoding {
    let steps = num_steps(bitwidth) as f64;
    let delta = max / steps;

    TfEncoding {
        bitwidth,
        min: 0.0,
        max: steps * delta,
        delta,
        offset: 0,
    }
}

// =============================================================================
// Tests
// =============================================================================
