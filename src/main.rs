use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cumulus::cli::args::Cli;
use cumulus::config::{ColorSetting, Config, Paths};
use cumulus::error::CumulusError;
use cumulus::item::ItemStore;
use cumulus::repl::Session;
use cumulus::storage;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), CumulusError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {}
    }

    // CLI flags beat config beats the default location.
    let data_file: Option<PathBuf> = if cli.no_save {
        None
    } else {
        Some(
            cli.data_file
                .or(config.general.data_file)
                .unwrap_or_else(|| Paths::default().data_file),
        )
    };

    let store = match &data_file {
        Some(path) => match storage::load(path) {
            Ok(store) => store,
            // A bad data file never prevents the assistant from starting.
            Err(e) => {
                eprintln!(
                    "{}: could not load items from {path:?}: {e}",
                    "warning".yellow().bold()
                );
                ItemStore::new()
            }
        },
        None => ItemStore::new(),
    };

    let mut session = Session::new(store, data_file, cli.output, config.general.prompt);
    session.run(io::stdin().lock(), io::stdout())
}
