use crate::error::{NgramError, Result};
use serde::{Deserialize, Serialize};

/// Symbols kept inside words besides ASCII letters and digits
pub const DEFAULT_SYMBOLS: &str = "$£%";

/// Character allow-list for the tokenizer
///
/// # Example TOML
/// ```toml
/// [tokenizer]
/// symbols = "$£€%"
/// contractions = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Extra characters treated as word characters (e.g., currency signs)
    pub symbols: String,

    /// Keep an apostrophe that sits between two ASCII letters ("can't")
    pub contractions: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_string(),
            contractions: true,
        }
    }
}

impl TokenizerConfig {
    /// Reject symbols that would break the single-space word split
    pub fn validate(&self) -> Result<()> {
        match self.symbols.chars().find(|&c| c.is_whitespace() || c == '\'') {
            Some(c) => Err(NgramError::InvalidSymbol(c)),
            None => Ok(()),
        }
    }

    pub(crate) fn is_word_char(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.symbols.contains(c)
    }
}
