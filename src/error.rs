//! Error types for cumulus.

use thiserror::Error;

/// All errors that can surface from the cumulus library.
#[derive(Debug, Error)]
pub enum CumulusError {
    /// A required portion of input (command word or description) was absent.
    ///
    /// Always recoverable: the dispatcher reports the hint (if any) to the
    /// user and abandons that single command.
    #[error("{}", .hint.as_deref().unwrap_or("Input is missing required content."))]
    MissingInput {
        /// Optional user-facing message explaining what was missing.
        hint: Option<String>,
    },

    /// A flag was present but its captured sub-input was empty.
    #[error("Please enter a description for the \"{flag}\" flag.")]
    MissingFlagInput {
        /// The flag name, without its `/` prefix.
        flag: String,
    },

    /// Configuration could not be resolved, loaded, or saved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure (storage file, stdin).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Item state could not be serialized or deserialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CumulusError {
    /// Shorthand for a [`CumulusError::MissingInput`] without a hint.
    #[must_use]
    pub const fn missing_input() -> Self {
        Self::MissingInput { hint: None }
    }

    /// Shorthand for a [`CumulusError::MissingInput`] carrying a user-facing hint.
    #[must_use]
    pub fn missing_input_with_hint(hint: impl Into<String>) -> Self {
        Self::MissingInput {
            hint: Some(hint.into()),
        }
    }
}
