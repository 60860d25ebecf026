//! JSON output formatting for cumulus.

use serde_json::json;

use crate::error::CumulusError;
use crate::item::ItemStore;

/// Format the whole store as pretty-printed JSON.
///
/// # Errors
///
/// Returns `CumulusError::Json` if serialization fails.
pub fn format_items(store: &ItemStore) -> Result<String, CumulusError> {
    let output = json!({
        "count": store.len(),
        "items": store.items(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
