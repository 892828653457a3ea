#![no_main]

use libfuzzer_sys::fuzz_target;
use ngrams::sequence::{bag_of_skipgrams, CaseMode, OrderPolicy};
use ngrams::tokenizer::tokenize;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Tokenizing and bagging arbitrary text must never panic
        let words = tokenize(input);
        let _ = bag_of_skipgrams(&words, 2, 3, OrderPolicy::Sort, CaseMode::Insensitive);
    }
});
