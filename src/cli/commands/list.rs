//! The list and find commands.

use crate::cli::args::OutputFormat;
use crate::cli::commands::Outcome;
use crate::item::ItemStore;
use crate::output;
use crate::token::TokenManager;

/// Render every item in the store.
pub fn list(store: &ItemStore, format: OutputFormat) -> Outcome {
    match format {
        OutputFormat::Pretty => {
            if store.is_empty() {
                return Outcome::reply("Your TODO list is empty.");
            }
            Outcome::reply(output::pretty::format_items(store))
        }
        OutputFormat::Json => match output::json::format_items(store) {
            Ok(json) => Outcome::reply(json),
            Err(e) => Outcome::reply(format!("ERR Could not serialize items: {e}")),
        },
    }
}

/// Render every item whose description contains the query phrase.
pub fn find(store: &ItemStore, manager: &TokenManager) -> Outcome {
    let Ok(query) = manager.description() else {
        return Outcome::reply("Please enter a phrase to search for.");
    };

    let matches = store.find(&query);
    if matches.is_empty() {
        return Outcome::reply("No matches were found. Please try a different query.");
    }

    Outcome::reply(matches.join("\n"))
}
