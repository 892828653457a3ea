//! Integration tests for the documented generation scenarios
//!
//! Each test drives the public library API end to end: raw text through the
//! tokenizer into the generators and bags.

use ngrams::sequence::{
    bag_of_ngrams, bag_of_skipgrams, bag_of_words, ngrams, skipgrams, CaseMode, OrderPolicy,
    SkipGram,
};
use ngrams::tokenizer::tokenize;
use ngrams::NgramError;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_tokenize_poem_line() {
    assert_eq!(
        tokenize("Things fall apart; the centre cannot hold;"),
        words(&["Things", "fall", "apart", "the", "centre", "cannot", "hold"])
    );
}

#[test]
fn test_bigrams() {
    assert_eq!(ngrams(&words(&["a", "b", "c"]), 2), words(&["a b", "b c"]));
}

#[test]
fn test_skipgrams_preserve() {
    assert_eq!(
        skipgrams(&words(&["a", "b", "c"]), 1, 2, OrderPolicy::Preserve),
        vec![
            SkipGram::new("a", "b"),
            SkipGram::new("a", "c"),
            SkipGram::new("b", "c"),
        ]
    );
}

#[test]
fn test_bag_of_words_insensitive() {
    assert_eq!(
        bag_of_words(&words(&["This", "this", "THAT"]), CaseMode::Insensitive),
        words(&["This", "THAT"])
    );
}

#[test]
fn test_text_to_trigram_bag() {
    let words = tokenize("the centre cannot hold, the centre cannot hold!");

    assert_eq!(
        bag_of_ngrams(&words, 3, CaseMode::Sensitive),
        vec![
            "the centre cannot",
            "centre cannot hold",
            "cannot hold the",
            "hold the centre",
        ]
    );
}

#[test]
fn test_text_to_skipgram_bag() {
    let words = tokenize("Hold, hold... HOLD!");

    // Three identical (folded) pairs collapse to the first one seen
    let bag = bag_of_skipgrams(&words, 1, 2, OrderPolicy::Sort, CaseMode::Insensitive);
    assert_eq!(bag.len(), 1);

    let bag = bag_of_skipgrams(&words, 1, 2, OrderPolicy::Sort, CaseMode::Sensitive);
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_legacy_integer_constants() {
    let order = OrderPolicy::try_from(2).unwrap();
    let case = CaseMode::try_from(2).unwrap();
    let words = words(&["a", "A"]);

    assert_eq!(
        bag_of_skipgrams(&words, 1, 1, order, case),
        vec![SkipGram::new("a", "A")]
    );

    assert!(matches!(
        OrderPolicy::try_from(7),
        Err(NgramError::InvalidOrderPolicy(_))
    ));
    assert!(matches!(
        CaseMode::try_from(-1),
        Err(NgramError::InvalidCaseMode(_))
    ));
}
