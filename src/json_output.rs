//! JSON output format for generation results
//!
//! `--format json` wraps the result with the parameters that produced it.

use crate::generate::{GenerateConfig, Operation};
use crate::output::GramList;
use crate::report::ReportSection;
use crate::sequence::{CaseMode, OrderPolicy};
use serde::Serialize;

/// Parameters echoed next to the result
#[derive(Debug, Clone, Serialize)]
pub struct JsonParameters {
    /// N-gram size (absent for token and bag-of-words output)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Skip-gram distance (skip-gram operations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    /// Skip-gram order policy (skip-gram operations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<OrderPolicy>,
    /// Case mode (bag operations only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<CaseMode>,
}

impl JsonParameters {
    /// Keep only the parameters `operation` actually reads
    pub fn for_operation(operation: Operation, config: &GenerateConfig) -> Self {
        let uses_size = !matches!(operation, Operation::Tokens | Operation::BagOfWords);
        let uses_distance = matches!(operation, Operation::Skipgrams | Operation::BagOfSkipgrams);
        let uses_case = matches!(
            operation,
            Operation::BagOfNgrams | Operation::BagOfWords | Operation::BagOfSkipgrams
        );

        Self {
            size: uses_size.then_some(config.size),
            distance: uses_distance.then_some(config.distance),
            order: uses_distance.then_some(config.order),
            case: uses_case.then_some(config.case),
        }
    }
}

/// Envelope for a single operation
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Operation that produced the results
    pub operation: Operation,
    /// Number of input words
    pub words: usize,
    pub parameters: JsonParameters,
    /// Number of results
    pub count: usize,
    pub results: GramList,
}

impl JsonOutput {
    pub fn new(
        operation: Operation,
        words: usize,
        config: &GenerateConfig,
        results: GramList,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "ngrams-json-v1".to_string(),
            operation,
            words,
            parameters: JsonParameters::for_operation(operation, config),
            count: results.len(),
            results,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Envelope for the full report
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub version: String,
    pub format: String,
    pub words: usize,
    pub sections: Vec<ReportSection>,
}

impl JsonReport {
    pub fn new(words: usize, sections: Vec<ReportSection>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "ngrams-report-v1".to_string(),
            words,
            sections,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::SkipGram;

    fn config() -> GenerateConfig {
        GenerateConfig {
            size: 2,
            distance: 3,
            order: OrderPolicy::Sort,
            case: CaseMode::Insensitive,
        }
    }

    #[test]
    fn test_ngrams_output_omits_unused_parameters() {
        let output = JsonOutput::new(
            Operation::Ngrams,
            3,
            &config(),
            GramList::Grams(vec!["a b".to_string(), "b c".to_string()]),
        );
        let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(value["format"], "ngrams-json-v1");
        assert_eq!(value["operation"], "ngrams");
        assert_eq!(value["count"], 2);
        assert_eq!(value["parameters"]["size"], 2);
        assert!(value["parameters"].get("distance").is_none());
        assert!(value["parameters"].get("case").is_none());
        assert_eq!(value["results"][1], "b c");
    }

    #[test]
    fn test_bag_of_skipgrams_output() {
        let output = JsonOutput::new(
            Operation::BagOfSkipgrams,
            2,
            &config(),
            GramList::SkipGrams(vec![SkipGram::new("a", "b")]),
        );
        let value: serde_json::Value = serde_json::from_str(&output.to_json().unwrap()).unwrap();

        assert_eq!(value["operation"], "bag-of-skipgrams");
        assert_eq!(value["parameters"]["distance"], 3);
        assert_eq!(value["parameters"]["order"], "sort");
        assert_eq!(value["parameters"]["case"], "insensitive");
        assert_eq!(value["results"][0][1], "b");
    }

    #[test]
    fn test_tokens_output_has_no_parameters() {
        let params = JsonParameters::for_operation(Operation::Tokens, &config());
        assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
    }
}
