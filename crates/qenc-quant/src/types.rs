//! Encoding Types
//!
//! Defines the accumulated statistics an analyzer keeps and the encoding it
//! produces.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use std::fmt;

// =============================================================================
// Accumulated Statistics
// =============================================================================

/// Running `{min, max}` summary over every sample an analyzer has observed.
///
/// Starts at `{+inf, -inf}` so the first real observation replaces both
/// fields. Until then `min > max`, and the summary describes no data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccumulatedStats {
    /// Smallest value observed.
    pub min: f64,
    /// Largest value observed.
    pub max: f64,
}

impl AccumulatedStats {
    /// Creates the empty summary.
    pub const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Folds one sample's extremes into the summary.
    pub fn observe(&mut self, min: f64, max: f64) {
        self.min = self.min.min(min);
        self.max = self.max.max(max);
    }

    /// Folds another summary into this one.
    pub fn merge(&mut self, other: &AccumulatedStats) {
        self.observe(other.min, other.max);
    }

    /// Returns true if no value has been folded in yet.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// Returns the observed dynamic range, or `None` when empty.
    pub fn range(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.max - self.min)
        }
    }
}

impl Default for AccumulatedStats {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TF Encoding
// =============================================================================

/// Affine map between floating point values and an integer grid.
///
/// `quantized = round(x / delta) + offset` and
/// `x = (quantized - offset) * delta`. Codes live in `[0, 2^bitwidth - 1]`;
/// `offset` is the code that represents exact zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfEncoding {
    /// Number of bits in a quantized code.
    pub bitwidth: u8,
    /// Smallest representable value.
    pub min: f64,
    /// Largest representable value.
    pub max: f64,
    /// Step between adjacent codes.
    pub delta: f64,
    /// Code that represents zero.
    pub offset: i64,
}

impl TfEncoding {
    /// Returns the number of steps on the grid (`2^bitwidth - 1`).
    pub fn num_steps(&self) -> i64 {
        num_steps(self.bitwidth)
    }

    /// Returns the lowest and highest codes this encoding uses.
    ///
    /// Strict symmetric encodings leave the top code unused, so this is not
    /// always `(0, num_steps)`.
    pub fn code_range(&self) -> (i64, i64) {
        let lo = (self.min / self.delta).round() as i64 + self.offset;
        let hi = (self.max / self.delta).round() as i64 + self.offset;
        (lo.max(0), hi.min(self.num_steps()))
    }

    /// Maps a value to its code, saturating at the ends of the grid.
    ///
    /// NaN maps to `offset`, the code for zero.
    pub fn quantize(&self, x: f64) -> i64 {
        if x.is_nan() {
            return self.offset;
        }
        let (lo, hi) = self.code_range();
        let q = (x / self.delta).round() + self.offset as f64;
        (q.max(lo as f64).min(hi as f64)) as i64
    }

    /// Maps a code back to the value it represents.
    pub fn dequantize(&self, q: i64) -> f64 {
        (q - self.offset) as f64 * self.delta
    }
}

impl fmt::Display for TfEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TfEncoding(bw={}, min={}, max={}, delta={}, offset={})",
            self.bitwidth, self.min, self.max, self.delta, self.offset
        )
    }
}

/// Number of steps on a `bitwidth`-bit grid.
pub(crate) fn num_steps(bitwidth: u8) -> i64 {
    (1_i64 << bitwidth) - 1
}

// =============================================================================
// Tests
// =============================================================================
