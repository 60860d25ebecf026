//! The mark, unmark, and delete commands, which address items by number.

use crate::cli::commands::Outcome;
use crate::item::ItemStore;
use crate::token::TokenManager;

/// Result of validating the numeric argument of a command.
enum NumberCheck {
    /// A number the token-level validation accepts.
    Valid(usize),
    /// No argument at all; the command is silently ignored.
    Silent,
    /// A bad argument, with the reply to show the user.
    Invalid(String),
}

/// Validate the second token as an item number.
fn verify_number(store: &ItemStore, manager: &TokenManager) -> NumberCheck {
    let Some(token) = manager.token(1) else {
        return NumberCheck::Silent;
    };

    if !token.is_int() {
        return NumberCheck::Invalid(format!("\"{}\" is not a valid number.", token.get()));
    }

    if !token.is_valid_number(store.len()) {
        return NumberCheck::Invalid(format!("TODO #{} does not exist.", token.to_int()));
    }

    // to_int() is non-negative here: is_valid_number rejected negatives.
    NumberCheck::Valid(token.to_int() as usize)
}

/// Set or clear an item's completion state, replying with its new line.
pub fn mark(store: &mut ItemStore, manager: &TokenManager, complete: bool) -> Outcome {
    let number = match verify_number(store, manager) {
        NumberCheck::Valid(number) => number,
        NumberCheck::Silent => return Outcome::silent(),
        NumberCheck::Invalid(reply) => return Outcome::reply(reply),
    };

    // Token validation admits 0, which names no item.
    let Some(item) = store.get_mut(number) else {
        return Outcome::reply(format!("TODO #{number} does not exist."));
    };

    item.complete = complete;
    Outcome::mutated(item.render(number))
}

/// Remove an item, replying with the removed line.
pub fn delete(store: &mut ItemStore, manager: &TokenManager) -> Outcome {
    let number = match verify_number(store, manager) {
        NumberCheck::Valid(number) => number,
        NumberCheck::Silent => return Outcome::silent(),
        NumberCheck::Invalid(reply) => return Outcome::reply(reply),
    };

    let Some(item) = store.remove(number) else {
        return Outcome::reply(format!("TODO #{number} does not exist."));
    };

    Outcome::mutated(format!("Yeeted:\n{}", item.render(number)))
}
