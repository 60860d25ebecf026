//! JSON file persistence for item state.
//!
//! The full item list is written as pretty-printed JSON after every
//! state-changing command and read back on startup. A missing file is an
//! empty store; a corrupt file is an error the caller may choose to
//! recover from.

use std::fs;
use std::path::Path;

use crate::error::CumulusError;
use crate::item::{Item, ItemStore};

/// Write the whole store to `path`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns `CumulusError::Io` on filesystem failures and
/// `CumulusError::Json` if serialization fails.
pub fn save(path: &Path, store: &ItemStore) -> Result<(), CumulusError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(store.items())?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a store back from `path`. A missing file yields an empty store.
///
/// # Errors
///
/// Returns `CumulusError::Io` on filesystem failures and
/// `CumulusError::Json` if the file does not hold valid item JSON.
pub fn load(path: &Path) -> Result<ItemStore, CumulusError> {
    if !path.exists() {
        return Ok(ItemStore::new());
    }

    let raw = fs::read_to_string(path)?;
    let items: Vec<Item> = serde_json::from_str(&raw)?;
    Ok(ItemStore::from_items(items))
}
