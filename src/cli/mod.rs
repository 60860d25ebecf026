//! Command-line argument parsing and interactive command handling.

pub mod args;
pub mod commands;
