//! The add command: turns a tokenized input into a new item.

use crate::cli::commands::Outcome;
use crate::error::CumulusError;
use crate::item::{Item, ItemStore};
use crate::token::TokenManager;

/// Add an item built from the input, replying with its rendered line.
pub fn add(store: &mut ItemStore, manager: &TokenManager) -> Outcome {
    let item = match create_item(manager) {
        Ok(item) => item,
        // MissingInput and MissingFlagInput both carry their user-facing
        // message; report it and abandon this one command.
        Err(e) => return Outcome::reply(e.to_string()),
    };

    store.add(item);
    let number = store.len();
    match store.get(number) {
        Some(item) => Outcome::mutated(item.render(number)),
        None => Outcome::silent(),
    }
}

/// Build an item from a tokenized input.
///
/// A `/by` flag makes a deadline; otherwise `/from` together with `/to`
/// makes an event; otherwise a plain todo. A lone `/from` or `/to` is
/// ignored.
///
/// # Errors
///
/// Returns [`CumulusError::MissingInput`] if the description is absent,
/// or [`CumulusError::MissingFlagInput`] if a used flag has an empty
/// sub-input.
pub fn create_item(manager: &TokenManager) -> Result<Item, CumulusError> {
    let description = manager.description()?;

    if let Some(by) = manager.find_flag("by") {
        let by = flag_sub_input(by, "by")?;
        return Ok(Item::deadline(description, by));
    }

    if let (Some(from), Some(to)) = (manager.find_flag("from"), manager.find_flag("to")) {
        let from = flag_sub_input(from, "from")?;
        let to = flag_sub_input(to, "to")?;
        return Ok(Item::event(description, from, to));
    }

    Ok(Item::todo(description))
}

fn flag_sub_input(manager: &TokenManager, flag: &str) -> Result<String, CumulusError> {
    manager
        .sub_input()
        .ok_or_else(|| CumulusError::MissingFlagInput {
            flag: flag.to_string(),
        })
}
