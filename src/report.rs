//! Demonstration report: every operation swept over one word sequence
//!
//! Sections mirror the classic harness run: n-gram sizes 1..=5 plus the
//! whole-sequence and one-past-the-end sizes, a handful of skip-gram shapes,
//! and bag variants under both case modes. The bag-of-skipgrams section
//! always runs on [`CASE_SENTENCE`], whose repeats differ only by case.

use crate::output::GramList;
use crate::sequence::{
    bag_of_ngrams, bag_of_skipgrams, bag_of_words, ngrams, skipgrams, CaseMode, OrderPolicy,
};
use serde::Serialize;
use std::io::{self, Write};

/// Fixed input of the bag-of-skipgrams section
pub const CASE_SENTENCE: &str = "this and That are that and this";

/// (size, distance) shapes of the skip-gram section
const SKIPGRAM_SHAPES: [(usize, usize); 4] = [(1, 1), (1, 5), (2, 5), (3, 5)];

/// (size, case) settings of the bag-of-ngrams section
const BAG_SETTINGS: [(usize, CaseMode); 3] = [
    (1, CaseMode::Sensitive),
    (1, CaseMode::Insensitive),
    (2, CaseMode::Insensitive),
];

/// (order, case) settings of the bag-of-skipgrams section, all at size 1 distance 5
const BAG_SKIPGRAM_SETTINGS: [(OrderPolicy, CaseMode); 3] = [
    (OrderPolicy::Sort, CaseMode::Insensitive),
    (OrderPolicy::Preserve, CaseMode::Insensitive),
    (OrderPolicy::Sort, CaseMode::Sensitive),
];

/// One labelled result inside a report section
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub result: GramList,
}

/// A titled group of results
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub title: String,
    pub entries: Vec<ReportEntry>,
}

impl ReportSection {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            entries: Vec::new(),
        }
    }

    fn push(&mut self, label: String, result: GramList) {
        self.entries.push(ReportEntry { label, result });
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "YES"
    } else {
        "NO"
    }
}

/// Run the full sweep over `words`
pub fn build_report(words: &[String]) -> Vec<ReportSection> {
    let mut sections = Vec::with_capacity(5);

    let mut section = ReportSection::new("N GRAMS");
    for n in (1..=5).chain([words.len(), words.len() + 1]) {
        section.push(
            format!("N-gram size: {n}"),
            GramList::Grams(ngrams(words, n)),
        );
    }
    sections.push(section);

    let mut section = ReportSection::new("SKIP GRAMS");
    for (size, distance) in SKIPGRAM_SHAPES {
        section.push(
            format!("N: {size} Skip: {distance} (with sorting)"),
            GramList::SkipGrams(skipgrams(words, size, distance, OrderPolicy::Sort)),
        );
    }
    let (size, distance) = SKIPGRAM_SHAPES[0];
    section.push(
        format!("N: {size} Skip: {distance} (WITHOUT sorting)"),
        GramList::SkipGrams(skipgrams(words, size, distance, OrderPolicy::Preserve)),
    );
    sections.push(section);

    let mut section = ReportSection::new("BAG OF NGRAMS");
    for (n, case) in BAG_SETTINGS {
        section.push(
            format!(
                "N: {n} Case sensitive: {}",
                yes_no(case == CaseMode::Sensitive)
            ),
            GramList::Grams(bag_of_ngrams(words, n, case)),
        );
    }
    sections.push(section);

    let case_words: Vec<String> = CASE_SENTENCE.split(' ').map(String::from).collect();
    let mut section = ReportSection::new("BAG OF SKIPGRAMS");
    for (order, case) in BAG_SKIPGRAM_SETTINGS {
        section.push(
            format!(
                "N: 1 Skip: 5 Sort ngrams: {} Case sensitive: {}",
                yes_no(order == OrderPolicy::Sort),
                yes_no(case == CaseMode::Sensitive)
            ),
            GramList::SkipGrams(bag_of_skipgrams(&case_words, 1, 5, order, case)),
        );
    }
    sections.push(section);

    let mut section = ReportSection::new("BAG OF WORDS");
    for case in [CaseMode::Insensitive, CaseMode::Sensitive] {
        section.push(
            format!("Case sensitive: {}", yes_no(case == CaseMode::Sensitive)),
            GramList::Grams(bag_of_words(words, case)),
        );
    }
    sections.push(section);

    sections
}

/// Write the report in the plain-text log layout
pub fn write_text<W: Write>(sections: &[ReportSection], out: &mut W) -> io::Result<()> {
    for section in sections {
        writeln!(out)?;
        writeln!(out, "{:#^73}", format!(" {} ", section.title))?;
        writeln!(out)?;

        for entry in &section.entries {
            writeln!(out, "---")?;
            writeln!(out, "{}", entry.label)?;
            let text = entry.result.to_text();
            if !text.is_empty() {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}
