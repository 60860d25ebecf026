//! Tokenizes one instance of user input and extracts its flag sets.

use std::collections::HashMap;

use crate::error::CumulusError;
use crate::token::Token;

/// Manages all the tokens representing one instance of user input.
///
/// Flag sets are stored separate from the main token sequence. Within a
/// captured flag group, the first token is understood to be the flag
/// itself, whose flag text is used as the key; the remaining tokens are
/// the sub-input, stored in a nested `TokenManager` that undergoes the
/// same extraction recursively. After construction the main sequence
/// contains no flag tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenManager {
    tokens: Vec<Token>,
    flag_sets: HashMap<String, TokenManager>,
}

impl TokenManager {
    /// Tokenize a raw line of input and extract its flag sets.
    #[must_use]
    pub fn new(input: &str) -> Self {
        // Corner case: splitting "" yields [""] rather than []. Deal with
        // it by ignoring any leading empty words; empty words after the
        // first real word are preserved as literal empty tokens.
        let mut tokens = Vec::new();
        let mut encountered_content = false;
        for word in input.split(' ') {
            if !word.is_empty() {
                encountered_content = true;
            }
            if encountered_content {
                tokens.push(Token::new(word));
            }
        }

        Self::from_tokens(tokens)
    }

    /// Build a manager directly from an already-tokenized sequence,
    /// bypassing re-tokenization. Used for nested sub-managers.
    #[must_use]
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut manager = Self {
            tokens,
            flag_sets: HashMap::new(),
        };
        manager.extract_flag_sets();
        manager
    }

    /// Excise every flag group from the main sequence into `flag_sets`.
    ///
    /// Removal shifts later tokens into the current index, so the index
    /// only advances past non-flag tokens.
    fn extract_flag_sets(&mut self) {
        let mut i = 0;
        while i < self.tokens.len() {
            if !self.tokens[i].is_flag() {
                i += 1;
                continue;
            }

            let end = self.find_flag_set_end(i);
            let mut flag_set: Vec<Token> = self.tokens.drain(i..end).collect();

            // This removal degrades the flag set into a sub-input.
            let flag = flag_set.remove(0);
            self.flag_sets
                .insert(flag.flag(), Self::from_tokens(flag_set));
        }
    }

    /// The end index (exclusive) of the flag group starting at `start`:
    /// the index of the next flag token, or the end of the sequence.
    fn find_flag_set_end(&self, start: usize) -> usize {
        let mut end = start + 1;
        while end < self.tokens.len() && !self.tokens[end].is_flag() {
            end += 1;
        }
        end
    }

    fn join(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(Token::get)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The main token sequence, after flag extraction.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token at `index` in the main sequence, if present.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// The first token, understood to be the command, folded to
    /// lower-case.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::MissingInput`] if the input was empty.
    pub fn command(&self) -> Result<String, CumulusError> {
        self.tokens
            .first()
            .map(|token| token.get().to_lowercase())
            .ok_or_else(CumulusError::missing_input)
    }

    /// All rejoined tokens except the command.
    ///
    /// # Errors
    ///
    /// Returns [`CumulusError::MissingInput`] with a user-facing hint if
    /// the input holds fewer than two tokens.
    pub fn description(&self) -> Result<String, CumulusError> {
        if self.tokens.len() < 2 {
            return Err(CumulusError::missing_input_with_hint(
                "Please enter a description for your TODO.",
            ));
        }

        Ok(Self::join(&self.tokens[1..]))
    }

    /// The nested manager for the specified flag, if that flag was
    /// present in the input. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn find_flag(&self, flag: &str) -> Option<&Self> {
        self.flag_sets.get(&flag.to_lowercase())
    }

    /// The whole main sequence rejoined, or `None` when the sequence is
    /// empty. Used by the dispatcher to detect a flag with no sub-input.
    #[must_use]
    pub fn sub_input(&self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(Self::join(&self.tokens))
        }
    }
}

impl std::fmt::Display for TokenManager {
    /// The current main sequence rejoined with single spaces; flags are
    /// not part of this rendering.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Self::join(&self.tokens))
    }
}
