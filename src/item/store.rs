//! The ordered, 1-based in-memory list of items.

use crate::item::Item;

/// The single in-process item list, owned by the session loop and passed
/// explicitly to command handlers.
///
/// Items are addressed by 1-based numbers. Lookups with numbers that name
/// no real item (including the `0` and `item_count` boundary values that
/// token validation admits) return `None` rather than panicking; the
/// dispatch layer turns that into a "does not exist" reply.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a store from previously exported items.
    #[must_use]
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item; it becomes item number `len()`.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// The item with the given 1-based number.
    #[must_use]
    pub fn get(&self, number: usize) -> Option<&Item> {
        if number == 0 {
            return None;
        }
        self.items.get(number - 1)
    }

    /// Mutable access to the item with the given 1-based number.
    pub fn get_mut(&mut self, number: usize) -> Option<&mut Item> {
        if number == 0 {
            return None;
        }
        self.items.get_mut(number - 1)
    }

    /// Remove and return the item with the given 1-based number. Later
    /// items shift down by one.
    pub fn remove(&mut self, number: usize) -> Option<Item> {
        if number == 0 || number > self.items.len() {
            return None;
        }
        Some(self.items.remove(number - 1))
    }

    /// Rendered lines for every item whose description contains `query`.
    #[must_use]
    pub fn find(&self, query: &str) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.description.contains(query))
            .map(|(index, item)| item.render(index + 1))
            .collect()
    }

    /// All items in order, for export and list rendering.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
