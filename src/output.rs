//! Result container shared by the text and JSON renderers

use crate::sequence::{NGram, SkipGram};
use serde::Serialize;

/// Output of one generation operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GramList {
    /// Tokens, n-grams or a bag of either
    Grams(Vec<NGram>),
    /// Skip-grams or a bag of skip-grams
    SkipGrams(Vec<SkipGram>),
}

impl GramList {
    pub fn len(&self) -> usize {
        match self {
            GramList::Grams(grams) => grams.len(),
            GramList::SkipGrams(pairs) => pairs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable rendering
    ///
    /// N-grams go on one line separated by `" / "`; skip-grams get one
    /// `--> A / B` line each.
    pub fn to_text(&self) -> String {
        match self {
            GramList::Grams(grams) => grams.join(" / "),
            GramList::SkipGrams(pairs) => pairs
                .iter()
                .map(|pair| format!("--> {pair}"))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
