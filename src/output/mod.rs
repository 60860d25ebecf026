//! Output formatting for cumulus.

pub mod json;
pub mod pretty;
