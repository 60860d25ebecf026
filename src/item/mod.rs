//! Task item types and the in-memory item store.

mod store;

pub use store::ItemStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub description: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: Kind,
}

/// The closed set of item variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Kind {
    /// A plain todo with no timestamps.
    Todo,
    /// A todo with an ending timestamp.
    Deadline {
        #[serde(rename = "timestampEnd")]
        by: String,
    },
    /// A todo with both a starting and ending timestamp.
    Event {
        #[serde(rename = "timestampStart")]
        from: String,
        #[serde(rename = "timestampEnd")]
        to: String,
    },
}

impl Item {
    fn new(description: String, kind: Kind) -> Self {
        Self {
            description,
            complete: false,
            created: Utc::now(),
            kind,
        }
    }

    /// Create a plain todo.
    #[must_use]
    pub fn todo(description: String) -> Self {
        Self::new(description, Kind::Todo)
    }

    /// Create a deadline with an ending timestamp.
    #[must_use]
    pub fn deadline(description: String, by: String) -> Self {
        Self::new(description, Kind::Deadline { by })
    }

    /// Create an event with a starting and ending timestamp.
    #[must_use]
    pub fn event(description: String, from: String, to: String) -> Self {
        Self::new(description, Kind::Event { from, to })
    }

    /// One-letter code for the item variant.
    #[must_use]
    pub const fn type_string(&self) -> &'static str {
        match self.kind {
            Kind::Todo => "T",
            Kind::Deadline { .. } => "D",
            Kind::Event { .. } => "E",
        }
    }

    /// One-character marker for whether the item has been completed.
    #[must_use]
    pub const fn completion_string(&self) -> &'static str {
        if self.complete {
            "X"
        } else {
            " "
        }
    }

    fn basic_string(&self, number: usize) -> String {
        format!(
            "{} | {}#{}: {}",
            self.completion_string(),
            self.type_string(),
            number,
            self.description
        )
    }

    /// Render the item as its single-line listing under the given
    /// 1-based number.
    #[must_use]
    pub fn render(&self, number: usize) -> String {
        match &self.kind {
            Kind::Todo => self.basic_string(number),
            Kind::Deadline { by } => {
                format!("{} | BY {}", self.basic_string(number), by)
            }
            Kind::Event { from, to } => {
                format!("{} | FROM {} | TO {}", self.basic_string(number), from, to)
            }
        }
    }
}
