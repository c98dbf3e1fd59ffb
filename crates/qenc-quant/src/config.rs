//! Encoding Configuration
//!
//! The bit-width, symmetry modes and computation mode used when driving
//! analyzers, loadable from a TOML file:
//!
//! ```toml
//! bitwidth = 8
//! use_symmetric = true
//! use_strict_symmetric = true
//! computation_mode = "gpu"
//! ```
//!
//! Every key is optional; missing keys take their defaults.
//!
//! @version 0.1.0
//! @author `qenc` Development Team

use std::path::Path;

use qenc_core::ComputationMode;
use serde::{Deserialize, Serialize};

use crate::encoding::{check_symmetric_modes, validate_bitwidth};
use crate::error::{QuantError, QuantResult};
use crate::DEFAULT_BITWIDTH;

// =============================================================================
// Encoding Configuration
// =============================================================================

/// Settings for encoding computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingConfig {
    /// Bits per quantized code
    #[serde(default = "default_bitwidth")]
    pub bitwidth: u8,

    /// Center the grid on zero
    #[serde(default)]
    pub use_symmetric: bool,

    /// Symmetric refinement leaving the most negative code unused
    #[serde(default)]
    pub use_strict_symmetric: bool,

    /// Symmetric refinement for data without negative values
    #[serde(default)]
    pub use_unsigned_symmetric: bool,

    /// Where min/max reductions run
    #[serde(default)]
    pub computation_mode: ComputationMode,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            bitwidth: default_bitwidth(),
            use_symmetric: false,
            use_strict_symmetric: false,
            use_unsigned_symmetric: false,
            computation_mode: ComputationMode::default(),
        }
    }
}

fn default_bitwidth() -> u8 {
    DEFAULT_BITWIDTH
}

impl EncodingConfig {
    /// Asymmetric configuration with the given bit-width.
    pub fn asymmetric(bitwidth: u8) -> Self {
        Self {
            bitwidth,
            ..Self::default()
        }
    }

    /// Signed symmetric configuration with the given bit-width.
    pub fn symmetric(bitwidth: u8) -> Self {
        Self {
            bitwidth,
            use_symmetric: true,
            ..Self::default()
        }
    }

    /// Sets the computation mode from its name (`cpu`, `gpu`, ...).
    pub fn with_mode_name(mut self, name: &str) -> QuantResult<Self> {
        self.computation_mode = name.parse()?;
        Ok(self)
    }

    /// Checks the bit-width and the symmetric refinements.
    pub fn validate(&self) -> QuantResult<()> {
        check_symmetric_modes(
            self.use_symmetric,
            self.use_strict_symmetric,
            self.use_unsigned_symmetric,
        )?;
        validate_bitwidth(self.bitwidth, self.use_symmetric)
    }

    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> QuantResult<Self> {
        let config: EncodingConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> QuantResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded encoding config");
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> QuantResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| QuantError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EncodingConfig::default();
        assert_eq!(config.bitwidth, 8);
        assert!(!config.use_symmetric);
        assert_eq!(config.computation_mode, ComputationMode::Cpu);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config = EncodingConfig::from_toml_str(
            "use_symmetric = true\nuse_strict_symmetric = true\ncomputation_mode = \"cuda\"\n",
        )
        .unwrap();
        assert_eq!(config.bitwidth, 8);
        assert!(config.use_strict_symmetric);
        assert_eq!(config.computation_mode, ComputationMode::Gpu);
    }

    #[test]
    fn test_conflicting_toml_rejected() {
        let err = EncodingConfig::from_toml_str(
            "use_symmetric = true\nuse_strict_symmetric = true\nuse_unsigned_symmetric = true\n",
        )
        .unwrap_err();
        assert!(matches!(err, QuantError::ConflictingSymmetricModes));
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            EncodingConfig::from_toml_str("bitwidth = \"eight\""),
            Err(QuantError::Parse(_))
        ));
        assert!(matches!(
            EncodingConfig::from_toml_str("bitwidth = 0"),
            Err(QuantError::InvalidBitwidth(0))
        ));
    }

    #[test]
    fn test_with_mode_name() {
        let config = EncodingConfig::symmetric(8).with_mode_name("gpu").unwrap();
        assert_eq!(config.computation_mode, ComputationMode::Gpu);

        let err = EncodingConfig::default().with_mode_name("tpu").unwrap_err();
        assert!(matches!(err, QuantError::Core(_)));
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("encoding.toml");

        let config = EncodingConfig::symmetric(4).with_mode_name("gpu").unwrap();
        config.save(&path).unwrap();
        let loaded = EncodingConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = EncodingConfig::load("/nonexistent/qenc/encoding.toml").unwrap_err();
        assert!(matches!(err, QuantError::Io(_)));
    }
}
