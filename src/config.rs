//! TOML configuration for the tokenizer allow-list and generation defaults
//!
//! CLI flags override the `[defaults]` table; the `[tokenizer]` table is only
//! configurable from a file.

use crate::sequence::{CaseMode, OrderPolicy};
use crate::tokenizer::{Tokenizer, TokenizerConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../ngrams-default.toml");

/// Generation parameters used when the command line leaves them out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    /// N-gram size
    pub size: usize,

    /// Skip-gram pairing distance
    pub distance: usize,

    /// Skip-gram element order
    pub order: OrderPolicy,

    /// Bag deduplication case mode
    pub case: CaseMode,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self {
            size: 2,
            distance: 5,
            order: OrderPolicy::Sort,
            case: CaseMode::Insensitive,
        }
    }
}

/// Full configuration file
///
/// # Example TOML
/// ```toml
/// [tokenizer]
/// symbols = "$£€%"
/// contractions = true
///
/// [defaults]
/// size = 3
/// distance = 2
/// order = "preserve"
/// case = "sensitive"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tokenizer: TokenizerConfig,
    pub defaults: GenerationDefaults,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// Returns error if the file can't be read, has invalid TOML syntax or an
    /// unknown policy name, or allow-lists a separator character.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse TOML")?;
        config.tokenizer.validate()?;
        Ok(config)
    }

    /// Configuration embedded in the binary (ngrams-default.toml)
    pub fn embedded_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_TOML).context("Failed to parse embedded ngrams-default.toml")
    }

    /// Build the tokenizer described by the `[tokenizer]` table
    pub fn tokenizer(&self) -> Result<Tokenizer> {
        Ok(Tokenizer::new(self.tokenizer.clone())?)
    }
}
