use colored::Colorize;

use crate::item::ItemStore;

/// Format the whole store as a human-readable listing.
///
/// Every line follows the plain rendering contract of [`crate::item::Item::render`];
/// color is layered on top and disabled automatically on non-terminals.
#[must_use]
pub fn format_items(store: &ItemStore) -> String {
    let mut output = format!("TODOs ({} items)\n", store.len());
    output.push_str(&"─".repeat(60));

    for (index, item) in store.items().iter().enumerate() {
        let line = item.render(index + 1);
        let line = if item.complete {
            line.green().to_string()
        } else {
            line
        };

        output.push('\n');
        output.push_str(&line);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    #[test]
    fn test_format_items_counts_and_lines() {
        colored::control::set_override(false);

        let mut store = ItemStore::new();
        store.add(Item::todo("buy milk".to_string()));
        store.add(Item::event(
            "trip".to_string(),
            "mon".to_string(),
            "fri".to_string(),
        ));

        let output = format_items(&store);
        assert!(output.starts_with("TODOs (2 items)"));
        assert!(output.contains("  | T#1: buy milk"));
        assert!(output.contains("  | E#2: trip | FROM mon | TO fri"));
    }

    #[test]
    fn test_format_items_numbers_follow_store_order() {
        colored::control::set_override(false);

        let mut store = ItemStore::new();
        store.add(Item::todo("a".to_string()));
        store.add(Item::todo("b".to_string()));
        store.add(Item::todo("c".to_string()));

        let output = format_items(&store);
        let positions: Vec<usize> = ["T#1: a", "T#2: b", "T#3: c"]
            .iter()
            .map(|needle| output.find(needle).unwrap())
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
    }
}
