//! Text to word tokenization
//!
//! Raw text is scanned one character at a time. Allow-listed characters are
//! copied, every run of anything else collapses into a single space, and an
//! apostrophe survives only between two ASCII letters so that contractions
//! ("can't") stay whole while quote marks disappear.

mod allow_list;

pub use allow_list::{TokenizerConfig, DEFAULT_SYMBOLS};

use crate::error::Result;

/// Word tokenizer driven by a character allow-list
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a tokenizer, rejecting allow-lists that contain separators
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split `text` into words
    ///
    /// Empty (or all-separator) text yields a single empty word, the result
    /// of splitting an empty string.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let last = chars.len().saturating_sub(1);

        let mut sanitised = String::with_capacity(text.len());
        let mut on_space = true;

        for (i, &c) in chars.iter().enumerate() {
            if self.config.is_word_char(c) {
                sanitised.push(c);
                on_space = false;
            } else if self.config.contractions && c == '\'' && i > 0 && i < last {
                // Inner apostrophes are kept or dropped, never separators
                if chars[i - 1].is_ascii_alphabetic() && chars[i + 1].is_ascii_alphabetic() {
                    sanitised.push(c);
                    on_space = false;
                }
            } else if !on_space {
                sanitised.push(' ');
                on_space = true;
            }
        }

        let words: Vec<String> = sanitised.trim().split(' ').map(String::from).collect();

        tracing::trace!(chars = chars.len(), words = words.len(), "tokenized text");

        words
    }
}

/// Tokenize with the default allow-list (`[A-Za-z0-9$£%]` plus contractions)
///
/// # Example
/// ```
/// use ngrams::tokenizer::tokenize;
///
/// assert_eq!(
///     tokenize("Things fall apart; the centre cannot hold;"),
///     vec!["Things", "fall", "apart", "the", "centre", "cannot", "hold"]
/// );
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

/// True when a tokenizer result holds no real words (the `[""]` case)
pub fn is_empty_words(words: &[String]) -> bool {
    words.iter().all(String::is_empty)
}
