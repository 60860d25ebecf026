//! Interactive command dispatch.
//!
//! Each line of user input is tokenized into a [`TokenManager`], its
//! command word mapped to a [`CommandKind`], and the matching handler
//! run against the item store. Handlers never abort the session: any
//! failure becomes a reply for that single command.

mod add;
mod list;
mod modify;

pub use add::create_item;

use crate::cli::args::OutputFormat;
use crate::item::ItemStore;
use crate::token::TokenManager;

/// The known command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    List,
    Mark,
    Unmark,
    Delete,
    Find,
    Exit,
    Unknown,
}

impl CommandKind {
    /// Map a lower-cased command word to its kind.
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        match word {
            "add" | "todo" => Self::Add,
            "list" => Self::List,
            "mark" => Self::Mark,
            "unmark" => Self::Unmark,
            "delete" => Self::Delete,
            "find" => Self::Find,
            "bye" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// The result of handling one line of input.
#[derive(Debug, Clone, Default)]
pub struct Outcome {
    /// Text to show the user; empty for silent outcomes.
    pub reply: String,
    /// Whether the item store changed and should be saved.
    pub mutated: bool,
    /// Whether the session should end.
    pub exit: bool,
}

impl Outcome {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            ..Self::default()
        }
    }

    fn mutated(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            mutated: true,
            exit: false,
        }
    }

    const fn silent() -> Self {
        Self {
            reply: String::new(),
            mutated: false,
            exit: false,
        }
    }
}

/// Handle one raw line of user input against the store.
pub fn handle(store: &mut ItemStore, input: &str, format: OutputFormat) -> Outcome {
    let manager = TokenManager::new(input);
    let Ok(command) = manager.command() else {
        // Ignore empty inputs
        return Outcome::silent();
    };

    match CommandKind::from_word(&command) {
        CommandKind::Add => add::add(store, &manager),
        CommandKind::List => list::list(store, format),
        CommandKind::Mark => modify::mark(store, &manager, true),
        CommandKind::Unmark => modify::mark(store, &manager, false),
        CommandKind::Delete => modify::delete(store, &manager),
        CommandKind::Find => list::find(store, &manager),
        CommandKind::Exit => Outcome {
            reply: "\\o".to_string(),
            mutated: false,
            exit: true,
        },
        CommandKind::Unknown => {
            Outcome::reply(format!("\"{command}\" is not a valid command."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn handle_pretty(store: &mut ItemStore, input: &str) -> Outcome {
        handle(store, input, OutputFormat::Pretty)
    }

    // ===============
    // Dispatch Tests
    // ===============

    #[test]
    fn test_empty_input_is_ignored() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "");
        assert!(outcome.reply.is_empty());
        assert!(!outcome.mutated);
        assert!(!outcome.exit);
    }

    #[test]
    fn test_spaces_only_input_is_ignored() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "   ");
        assert!(outcome.reply.is_empty());
    }

    #[test]
    fn test_unknown_command() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "frobnicate the widget");
        assert_eq!(outcome.reply, "\"frobnicate\" is not a valid command.");
        assert!(!outcome.mutated);
    }

    #[test]
    fn test_unrecognized_shorthand_is_not_a_command() {
        // Only the fixed verb table is accepted; near-misses get the
        // standard invalid-command reply.
        let mut store = ItemStore::new();
        for word in ["ls", "remove", "search"] {
            let outcome = handle_pretty(&mut store, word);
            assert_eq!(outcome.reply, format!("\"{word}\" is not a valid command."));
        }
    }

    #[test]
    fn test_command_word_is_case_insensitive() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "ADD buy milk");
        assert!(outcome.mutated);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_exit_command() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "bye");
        assert!(outcome.exit);
        assert_eq!(outcome.reply, "\\o");
    }

    // ==================
    // Add Command Tests
    // ==================

    #[test]
    fn test_add_plain_todo() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add buy milk");

        assert!(outcome.mutated);
        assert_eq!(outcome.reply, "  | T#1: buy milk");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_deadline() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add submit report /by tomorrow");

        assert_eq!(outcome.reply, "  | D#1: submit report | BY tomorrow");
    }

    #[test]
    fn test_add_event() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add trip /from mon /to fri");

        assert_eq!(outcome.reply, "  | E#1: trip | FROM mon | TO fri");
    }

    #[test]
    fn test_add_without_description() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add");

        assert_eq!(outcome.reply, "Please enter a description for your TODO.");
        assert!(!outcome.mutated);
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_with_empty_flag_sub_input() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add submit report /by");

        assert_eq!(
            outcome.reply,
            "Please enter a description for the \"by\" flag."
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_with_only_from_falls_back_to_todo() {
        // An event needs both /from and /to; /from alone is dropped.
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "add trip /from mon");

        assert_eq!(outcome.reply, "  | T#1: trip");
    }

    // =====================
    // Mark / Unmark Tests
    // =====================

    #[test]
    fn test_mark_and_unmark() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "mark 1");
        assert_eq!(outcome.reply, "X | T#1: buy milk");
        assert!(outcome.mutated);

        let outcome = handle_pretty(&mut store, "unmark 1");
        assert_eq!(outcome.reply, "  | T#1: buy milk");
    }

    #[test]
    fn test_mark_without_number_is_silent() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "mark");
        assert!(outcome.reply.is_empty());
        assert!(!outcome.mutated);
    }

    #[test]
    fn test_mark_with_non_numeric_argument() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "mark milk");
        assert_eq!(outcome.reply, "\"milk\" is not a valid number.");
    }

    #[test]
    fn test_mark_nonexistent_number() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "mark 5");
        assert_eq!(outcome.reply, "TODO #5 does not exist.");
    }

    #[test]
    fn test_mark_zero_does_not_exist() {
        // Token validation admits 0; the store lookup rejects it.
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "mark 0");
        assert_eq!(outcome.reply, "TODO #0 does not exist.");
        assert!(!outcome.mutated);
    }

    // ====================
    // Delete Command Tests
    // ====================

    #[test]
    fn test_delete() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));
        store.add(Item::todo("pay rent".to_string()));

        let outcome = handle_pretty(&mut store, "delete 1");
        assert_eq!(outcome.reply, "Yeeted:\n  | T#1: buy milk");
        assert!(outcome.mutated);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().description, "pay rent");
    }

    #[test]
    fn test_delete_nonexistent_number() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "delete 1");
        assert_eq!(outcome.reply, "TODO #1 does not exist.");
    }

    // ==================
    // List / Find Tests
    // ==================

    #[test]
    fn test_list_empty_store() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "list");
        assert_eq!(outcome.reply, "Your TODO list is empty.");
    }

    #[test]
    fn test_list_renders_every_item() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));
        store.add(Item::deadline("pay rent".to_string(), "friday".to_string()));

        let outcome = handle_pretty(&mut store, "list");
        assert!(outcome.reply.contains("T#1: buy milk"));
        assert!(outcome.reply.contains("D#2: pay rent | BY friday"));
        assert!(!outcome.mutated);
    }

    #[test]
    fn test_list_json_output() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle(&mut store, "list", OutputFormat::Json);
        assert!(outcome.reply.contains("\"count\": 1"));
        assert!(outcome.reply.contains("\"description\": \"buy milk\""));
    }

    #[test]
    fn test_find_matches() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));
        store.add(Item::todo("pay rent".to_string()));

        let outcome = handle_pretty(&mut store, "find milk");
        assert_eq!(outcome.reply, "  | T#1: buy milk");
    }

    #[test]
    fn test_find_no_matches() {
        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));

        let outcome = handle_pretty(&mut store, "find rent");
        assert_eq!(
            outcome.reply,
            "No matches were found. Please try a different query."
        );
    }

    #[test]
    fn test_find_without_query() {
        let mut store = ItemStore::new();
        let outcome = handle_pretty(&mut store, "find");
        assert_eq!(outcome.reply, "Please enter a phrase to search for.");
    }
}
