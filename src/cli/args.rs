use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "cumulus")]
#[command(about = "An interactive command-line task assistant")]
#[command(long_about = "cumulus - An interactive command-line task assistant

Reads free-text commands from standard input, one per line, and keeps an
in-memory list of task items that is saved to disk after every change.

COMMANDS:
  add <description>                     Add a plain TODO
  add <description> /by <when>          Add a deadline
  add <description> /from <a> /to <b>   Add an event
  list                                  Show all items
  mark <n> / unmark <n>                 Toggle completion
  delete <n>                            Remove an item
  find <phrase>                         Search descriptions
  bye                                   Quit

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for the list command")]
#[command(version)]
pub struct Cli {
    /// Output format for the list command
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub output: OutputFormat,

    /// Override the file used to persist item state
    #[arg(long, value_name = "PATH", env = "CUMULUS_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Do not persist item state to disk
    #[arg(long)]
    pub no_save: bool,
}

/// Output format for the list command.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
