// N-gram and Skip-gram Generation over Word Sequences
//
// Contiguous n-grams are windows of `n` words joined with spaces. Skip-grams
// pair an n-gram with the n-grams starting up to `distance` positions later,
// optionally sorted so that (A, B) and (B, A) coincide. Bags keep the first
// occurrence of each distinct item, folding case on request.
//
// Every operation is a pure function of its inputs: nothing is mutated and
// no state outlives the call.

mod bag;
mod collate;
mod ngram;
mod policy;
mod skipgram;

pub use bag::{bag_of_ngrams, bag_of_skipgrams, bag_of_words, dedup, BagKey};
pub use collate::{collate, collate_folded};
pub use ngram::{ngrams, NGram};
pub use policy::{CaseMode, OrderPolicy};
pub use skipgram::{skipgrams, SkipGram};
