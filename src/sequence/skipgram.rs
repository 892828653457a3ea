use super::collate::collate;
use super::ngram::{ngrams, NGram};
use super::policy::OrderPolicy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A pair of n-grams drawn from two start positions of the same word sequence
///
/// Serializes as a two-element array: `["a", "c"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(NGram, NGram)", into = "(NGram, NGram)")]
pub struct SkipGram {
    pub first: NGram,
    pub second: NGram,
}

impl SkipGram {
    pub fn new(first: impl Into<NGram>, second: impl Into<NGram>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Swap the elements when `cmp(first, second)` is Greater
    ///
    /// Equal elements stay in place, like a stable two-element sort.
    pub(crate) fn sort_by<F>(&mut self, cmp: F)
    where
        F: Fn(&str, &str) -> Ordering,
    {
        if cmp(&self.first, &self.second) == Ordering::Greater {
            std::mem::swap(&mut self.first, &mut self.second);
        }
    }
}

impl From<(NGram, NGram)> for SkipGram {
    fn from((first, second): (NGram, NGram)) -> Self {
        Self { first, second }
    }
}

impl From<SkipGram> for (NGram, NGram) {
    fn from(gram: SkipGram) -> Self {
        (gram.first, gram.second)
    }
}

impl fmt::Display for SkipGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.first, self.second)
    }
}

/// Pairs each n-gram with the n-grams starting in the next `distance` positions
///
/// # Arguments
/// * `words` - Ordered token sequence
/// * `size` - N-gram size of both pair elements
/// * `distance` - How many later start positions to pair with; 0 yields nothing
/// * `order` - Sort each pair by collation, or keep `(earlier, later)`
///
/// # Returns
/// Pairs ordered by the earlier start index, then the later one. No
/// deduplication is applied.
///
/// # Example
/// ```
/// use ngrams::sequence::{skipgrams, OrderPolicy, SkipGram};
///
/// let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
/// let pairs = skipgrams(&words, 1, 2, OrderPolicy::Preserve);
///
/// assert_eq!(
///     pairs,
///     vec![SkipGram::new("a", "b"), SkipGram::new("a", "c"), SkipGram::new("b", "c")]
/// );
/// ```
pub fn skipgrams(
    words: &[String],
    size: usize,
    distance: usize,
    order: OrderPolicy,
) -> Vec<SkipGram> {
    let grams = ngrams(words, size);
    let mut pairs = Vec::new();

    for (i, head) in grams.iter().enumerate() {
        // Positions i+1 ..= i+distance, clipped to the end of the n-gram list
        let end = i.saturating_add(distance).min(grams.len().saturating_sub(1));

        for tail in grams.iter().take(end + 1).skip(i + 1) {
            let mut pair = SkipGram::new(head.clone(), tail.clone());
            if order == OrderPolicy::Sort {
                pair.sort_by(collate);
            }
            pairs.push(pair);
        }
    }

    tracing::trace!(
        size,
        distance,
        %order,
        ngrams = grams.len(),
        pairs = pairs.len(),
        "generated skip-grams"
    );

    pairs
}
