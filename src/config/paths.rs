//! Path resolution for cumulus configuration and data files.
//!
//! All cumulus data is stored in `~/.cumulus/`:
//! - `config.yaml` - Main configuration file
//! - `items.json` - Persisted item state

use std::path::PathBuf;

use crate::error::CumulusError;

/// Paths to cumulus configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.cumulus/`
    pub root: PathBuf,
    /// Config file: `~/.cumulus/config.yaml`
    pub config_file: PathBuf,
    /// Data file: `~/.cumulus/items.json`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CumulusError> {
        let home = std::env::var("HOME").map_err(|_| {
            CumulusError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".cumulus")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("items.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), CumulusError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                CumulusError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".cumulus"))
        })
    }
}
