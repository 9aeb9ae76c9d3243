//! Codec profile (range-profile.toml)
//!
//! The precision tier is not stored in range data blocks, so writer and
//! reader must agree on it out-of-band. A profile file carries that choice
//! along with the error check mode.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ProfileError;
use crate::layout::PrecisionTier;

/// Settings shared by the range size calculator and the range writers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeCodecProfile {
    /// Segment range data width (default: bits16)
    #[serde(default)]
    pub precision_tier: PrecisionTier,
    /// Verify written size against the computed size (default: `error-checks` feature)
    #[serde(default = "default_error_checks")]
    pub error_checks: bool,
}

fn default_error_checks() -> bool {
    cfg!(feature = "error-checks")
}

impl Default for RangeCodecProfile {
    fn default() -> Self {
        Self {
            precision_tier: PrecisionTier::default(),
            error_checks: default_error_checks(),
        }
    }
}

impl RangeCodecProfile {
    pub const fn new(precision_tier: PrecisionTier, error_checks: bool) -> Self {
        Self {
            precision_tier,
            error_checks,
        }
    }

    /// Profile at `tier` with the build's default error check mode
    pub fn with_tier(precision_tier: PrecisionTier) -> Self {
        Self {
            precision_tier,
            ..Self::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ProfileError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Loads a profile from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        let profile = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded range codec profile from {:?}: {:?}, error checks {}",
            path,
            profile.precision_tier,
            profile.error_checks
        );
        Ok(profile)
    }

    /// Saves the profile to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ProfileError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
