use super::collate::collate_folded;
use super::ngram::{ngrams, NGram};
use super::policy::{CaseMode, OrderPolicy};
use super::skipgram::{skipgrams, SkipGram};
use fnv::FnvHashSet;
use std::hash::Hash;

/// Items that can be deduplicated into a bag
///
/// The key must be injective over the item's content so that distinct items
/// never collide; only case folding may merge them.
pub trait BagKey {
    type Key: Hash + Eq;

    fn bag_key(&self, case: CaseMode) -> Self::Key;
}

impl BagKey for String {
    type Key = String;

    fn bag_key(&self, case: CaseMode) -> String {
        case.fold(self)
    }
}

impl BagKey for SkipGram {
    // Tuple key: ("a b", "c") and ("a", "b c") stay distinct
    type Key = (String, String);

    fn bag_key(&self, case: CaseMode) -> (String, String) {
        (case.fold(&self.first), case.fold(&self.second))
    }
}

/// Keeps the first occurrence of every distinct key, in input order
///
/// Returned items keep their original casing.
pub fn dedup<T: BagKey>(items: Vec<T>, case: CaseMode) -> Vec<T> {
    let total = items.len();
    let mut seen: FnvHashSet<T::Key> = FnvHashSet::default();

    let bag: Vec<T> = items
        .into_iter()
        .filter(|item| seen.insert(item.bag_key(case)))
        .collect();

    tracing::debug!(%case, total, unique = bag.len(), "reduced to bag");

    bag
}

/// Distinct n-grams in first-seen order
///
/// # Example
/// ```
/// use ngrams::sequence::{bag_of_ngrams, CaseMode};
///
/// let words: Vec<String> = "a b a b".split(' ').map(String::from).collect();
/// assert_eq!(bag_of_ngrams(&words, 2, CaseMode::Sensitive), vec!["a b", "b a"]);
/// ```
pub fn bag_of_ngrams(words: &[String], n: usize, case: CaseMode) -> Vec<NGram> {
    dedup(ngrams(words, n), case)
}

/// Distinct words in first-seen order (bag of unigrams)
pub fn bag_of_words(words: &[String], case: CaseMode) -> Vec<NGram> {
    bag_of_ngrams(words, 1, case)
}

/// Distinct skip-grams in first-seen order
///
/// With `Insensitive` and `Sort` together, every pair gets a second sort by
/// its lowercased elements before keys are built. Pairs whose elements differ
/// only by case compare equal in that pass and keep their collated order.
///
/// With the current [`collate`](fn@super::collate) the second pass never swaps
/// anything, since case is already folded at its primary level; it stays
/// pending a review of whether both passes are needed.
pub fn bag_of_skipgrams(
    words: &[String],
    size: usize,
    distance: usize,
    order: OrderPolicy,
    case: CaseMode,
) -> Vec<SkipGram> {
    let mut pairs = skipgrams(words, size, distance, order);

    if case == CaseMode::Insensitive && order == OrderPolicy::Sort {
        for pair in &mut pairs {
            pair.sort_by(collate_folded);
        }
    }

    dedup(pairs, case)
}
