//! A single whitespace-delimited word of user input.

/// The prefix character marking a token as a flag.
pub const FLAG_PREFIX: char = '/';

/// One word of user input, with derived integer and flag interpretations.
///
/// Constructed once from a substring produced by whitespace-splitting and
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
}

impl Token {
    /// Wrap one word of input.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw text, verbatim.
    #[must_use]
    pub fn get(&self) -> &str {
        &self.text
    }

    fn parse_int(&self) -> Option<i32> {
        self.text.parse().ok()
    }

    /// Whether the entire text parses as a base-10 integer.
    ///
    /// Leading `+`/`-` are allowed; partial matches and floats are not.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.parse_int().is_some()
    }

    /// The text as an integer.
    ///
    /// Use [`Token::is_int`] to check if this is possible.
    ///
    /// Returns the sentinel `-1` if the text is not a valid integer. This
    /// is never an error: malformed numeric input is an expected user-input
    /// shape that callers probe for via `is_int()` first, and `-1` can
    /// never be a valid 1-based item number.
    #[must_use]
    pub fn to_int(&self) -> i32 {
        self.parse_int().unwrap_or(-1)
    }

    /// Whether the token is a valid item number for a list of `item_count`
    /// items.
    ///
    /// The accepted range is `0..=item_count` inclusive on both ends; the
    /// dispatch layer treats the boundary values that name no real item as
    /// "does not exist", not this check.
    #[must_use]
    pub fn is_valid_number(&self, item_count: usize) -> bool {
        let Some(number) = self.parse_int() else {
            return false;
        };

        if number < 0 {
            return false;
        }
        number as usize <= item_count
    }

    /// Whether the token is a flag (starts with [`FLAG_PREFIX`]).
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.text.starts_with(FLAG_PREFIX)
    }

    /// The text portion of the flag, with the prefix removed and folded to
    /// lower-case.
    ///
    /// Use [`Token::is_flag`] to check if this makes sense.
    ///
    /// Returns `""` if the token is not actually a flag.
    #[must_use]
    pub fn flag(&self) -> String {
        self.text
            .strip_prefix(FLAG_PREFIX)
            .map(str::to_lowercase)
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
