//! CLI argument parsing for ngrams

use crate::generate::Operation;
use crate::sequence::{CaseMode, OrderPolicy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "ngrams")]
#[command(version)]
#[command(about = "Tokenize text and generate n-grams, skip-grams and bags", long_about = None)]
pub struct Cli {
    /// Operation to run on the tokenized input
    #[arg(short = 'o', long = "op", value_enum, default_value = "ngrams")]
    pub operation: Operation,

    /// Run every operation and print the demonstration report instead
    #[arg(long = "report", conflicts_with = "operation")]
    pub report: bool,

    /// N-gram size (overrides config default)
    #[arg(short = 'n', long = "size", value_name = "N")]
    pub size: Option<usize>,

    /// Skip-gram distance (overrides config default)
    #[arg(short = 'd', long = "distance", value_name = "DISTANCE")]
    pub distance: Option<usize>,

    /// Skip-gram element order (overrides config default)
    #[arg(long = "order", value_enum)]
    pub order: Option<OrderPolicy>,

    /// Case mode for bag deduplication (overrides config default)
    #[arg(long = "case", value_enum)]
    pub case: Option<CaseMode>,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Read input text from FILE instead of arguments or stdin
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Write output to FILE instead of stdout
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML configuration file (tokenizer allow-list and defaults)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Input text (joined with spaces); stdin is read when omitted
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,
}
