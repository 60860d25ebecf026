//! cumulus - An interactive command-line task assistant
//!
//! This crate keeps an in-memory list of task items (plain todos,
//! deadlines, events) and responds to free-text commands read one line
//! at a time. The core is the tokenizer and flag-set extractor in
//! [`token`], which turns a raw line into a command word, a description,
//! and named, recursively tokenized flag sub-inputs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod item;
pub mod output;
pub mod repl;
pub mod storage;
pub mod token;

pub use cli::args::{Cli, OutputFormat};
pub use error::CumulusError;
pub use token::{Token, TokenManager};
