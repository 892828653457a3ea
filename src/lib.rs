//! ngrams - word tokenization with n-gram, skip-gram and bag generation
//!
//! This library turns raw text into a word sequence and derives contiguous
//! n-grams, distance-bounded skip-gram pairs, and order-preserving
//! deduplicated bags of either, with configurable case folding and pair
//! ordering.
//!
//! # Example
//! ```
//! use ngrams::sequence::{bag_of_words, ngrams, CaseMode};
//! use ngrams::tokenizer::tokenize;
//!
//! let words = tokenize("This, this and THAT");
//! assert_eq!(ngrams(&words, 2), vec!["This this", "this and", "and THAT"]);
//! assert_eq!(bag_of_words(&words, CaseMode::Insensitive), vec!["This", "and", "THAT"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod json_output;
pub mod output;
pub mod report;
pub mod sequence;
pub mod tokenizer;

pub use error::{NgramError, Result};
