//! Dispatch of a single generation request

use crate::output::GramList;
use crate::sequence::{
    bag_of_ngrams, bag_of_skipgrams, bag_of_words, ngrams, skipgrams, CaseMode, OrderPolicy,
};
use clap::ValueEnum;
use serde::Serialize;

/// Operation requested on the tokenized input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Print the tokenized words
    Tokens,
    /// Contiguous n-grams
    Ngrams,
    /// Skip-gram pairs
    Skipgrams,
    /// Distinct n-grams
    BagOfNgrams,
    /// Distinct words
    BagOfWords,
    /// Distinct skip-gram pairs
    BagOfSkipgrams,
}

/// Parameters for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    pub size: usize,
    pub distance: usize,
    pub order: OrderPolicy,
    pub case: CaseMode,
}

/// Run one operation over a word sequence
pub fn generate(operation: Operation, words: &[String], config: &GenerateConfig) -> GramList {
    let GenerateConfig {
        size,
        distance,
        order,
        case,
    } = *config;

    let result = match operation {
        Operation::Tokens => GramList::Grams(words.to_vec()),
        Operation::Ngrams => GramList::Grams(ngrams(words, size)),
        Operation::Skipgrams => GramList::SkipGrams(skipgrams(words, size, distance, order)),
        Operation::BagOfNgrams => GramList::Grams(bag_of_ngrams(words, size, case)),
        Operation::BagOfWords => GramList::Grams(bag_of_words(words, case)),
        Operation::BagOfSkipgrams => {
            GramList::SkipGrams(bag_of_skipgrams(words, size, distance, order, case))
        }
    };

    tracing::debug!(?operation, results = result.len(), "generation complete");

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SkipGram;

    fn config() -> GenerateConfig {
        GenerateConfig {
            size: 1,
            distance: 2,
            order: OrderPolicy::Preserve,
            case: CaseMode::Insensitive,
        }
    }

    fn words() -> Vec<String> {
        vec!["a".to_string(), "B".to_string(), "b".to_string()]
    }

    #[test]
    fn test_generate_dispatch() {
        let words = words();
        let config = config();

        assert_eq!(
            generate(Operation::Tokens, &words, &config),
            GramList::Grams(words.clone())
        );
        assert_eq!(
            generate(Operation::BagOfWords, &words, &config),
            GramList::Grams(vec!["a".to_string(), "B".to_string()])
        );
        assert_eq!(
            generate(Operation::Skipgrams, &words, &config).len(),
            3
        );
        assert_eq!(
            generate(Operation::BagOfSkipgrams, &words, &config),
            GramList::SkipGrams(vec![SkipGram::new("a", "B"), SkipGram::new("B", "b")])
        );
    }

    #[test]
    fn test_generate_uses_size() {
        let config = GenerateConfig {
            size: 2,
            ..config()
        };

        assert_eq!(
            generate(Operation::Ngrams, &words(), &config),
            GramList::Grams(vec!["a B".to_string(), "B b".to_string()])
        );
        assert_eq!(generate(Operation::BagOfNgrams, &words(), &config).len(), 2);
    }
}
