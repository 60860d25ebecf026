//! Configuration settings for cumulus.
//!
//! Settings are loaded from `~/.cumulus/config.yaml`. Every field has a
//! default, so a missing file or a partial file both work. Command-line
//! flags override anything set here.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::CumulusError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color output setting.
    pub color: ColorSetting,
    /// Override for the item data file.
    pub data_file: Option<PathBuf>,
    /// Custom input marker shown before each prompt.
    pub prompt: Option<String>,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl Config {
    /// Load configuration from the default location, falling back to
    /// defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or
    /// parsed.
    pub fn load() -> Result<Self, CumulusError> {
        Self::load_from_path(&Paths::default().config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, CumulusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| {
            CumulusError::Config(format!("Failed to read config file {path:?}: {e}"))
        })?;

        serde_yaml::from_str(&raw).map_err(|e| {
            CumulusError::Config(format!("Failed to parse config file {path:?}: {e}"))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), CumulusError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| CumulusError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, yaml).map_err(|e| {
            CumulusError::Config(format!("Failed to write config file {path:?}: {e}"))
        })
    }
}
