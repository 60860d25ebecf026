//! The interactive session loop.
//!
//! Reads commands from standard input one line at a time, dispatches
//! each to completion, and saves item state after every mutating command.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use crate::cli::args::OutputFormat;
use crate::cli::commands;
use crate::error::CumulusError;
use crate::item::ItemStore;
use crate::storage;

/// The default input marker.
pub const DEFAULT_PROMPT: &str = ">>> ";

/// One interactive session: the item store, where to persist it, and how
/// to render lists.
pub struct Session {
    store: ItemStore,
    /// Persistence target; `None` disables saving entirely.
    data_file: Option<PathBuf>,
    format: OutputFormat,
    prompt: String,
}

impl Session {
    #[must_use]
    pub fn new(
        store: ItemStore,
        data_file: Option<PathBuf>,
        format: OutputFormat,
        prompt: Option<String>,
    ) -> Self {
        Self {
            store,
            data_file,
            format,
            prompt: prompt.unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        }
    }

    /// Run the session to completion: greet, then read and handle lines
    /// until EOF or an exit command.
    ///
    /// # Errors
    ///
    /// Returns an error only when reading input or writing output fails;
    /// command-level failures become replies and never end the session.
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        mut output: impl Write,
    ) -> Result<(), CumulusError> {
        writeln!(output, "Cumulus online.")?;

        loop {
            write!(output, "\n{}", self.prompt)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim_end_matches(['\n', '\r']);

            let outcome = commands::handle(&mut self.store, line, self.format);
            if !outcome.reply.is_empty() {
                writeln!(output, "{}", outcome.reply)?;
            }

            if outcome.mutated {
                self.save(&mut output)?;
            }

            if outcome.exit {
                break;
            }
        }

        Ok(())
    }

    /// Persist the store, reporting failure to the user without ending
    /// the session.
    fn save(&self, output: &mut impl Write) -> Result<(), CumulusError> {
        let Some(path) = &self.data_file else {
            return Ok(());
        };

        if let Err(e) = storage::save(path, &self.store) {
            writeln!(
                output,
                "{} Could not save items to {path:?}: {e}",
                "ERR".red().bold()
            )?;
        }

        Ok(())
    }
}
