//! Input tokenization and flag-set extraction.
//!
//! This module turns a raw line of user input into a structured command:
//! a primary verb, a free-text description, and zero or more named flag
//! sub-inputs (e.g. `/by`, `/from`, `/to`), each of which is itself a
//! recursively tokenized sub-command.

mod manager;
mod token;

pub use manager::TokenManager;
pub use token::{Token, FLAG_PREFIX};
