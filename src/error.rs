//! Error types for the n-gram library
//!
//! Generation itself is total over well-formed input. The only failures are
//! contract violations: an order/case policy outside its enumerated set, or a
//! tokenizer symbol that would corrupt the word split.

use thiserror::Error;

/// Errors for policy parsing and tokenizer configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NgramError {
    #[error("Invalid order policy: {0} (expected sort/1 or preserve/2)")]
    InvalidOrderPolicy(String),

    #[error("Invalid case mode: {0} (expected sensitive/1 or insensitive/2)")]
    InvalidCaseMode(String),

    #[error("Invalid tokenizer symbol {0:?}: whitespace and apostrophes cannot be allow-listed")]
    InvalidSymbol(char),
}

pub type Result<T> = std::result::Result<T, NgramError>;
