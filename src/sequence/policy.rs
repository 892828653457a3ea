use crate::error::{NgramError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the two n-grams of a skip-gram are sorted or kept in generation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    /// Sort each pair by collation order (legacy constant 1)
    Sort,
    /// Keep `(earlier, later)` generation order (legacy constant 2)
    Preserve,
}

/// Whether bag deduplication folds case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// Exact string equality (legacy constant 1)
    Sensitive,
    /// Lowercased equality (legacy constant 2)
    Insensitive,
}

impl CaseMode {
    /// Apply the mode to a dedup key component
    pub fn fold(self, s: &str) -> String {
        match self {
            CaseMode::Sensitive => s.to_string(),
            CaseMode::Insensitive => s.to_lowercase(),
        }
    }
}

impl TryFrom<i64> for OrderPolicy {
    type Error = NgramError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(OrderPolicy::Sort),
            2 => Ok(OrderPolicy::Preserve),
            other => Err(NgramError::InvalidOrderPolicy(other.to_string())),
        }
    }
}

impl TryFrom<i64> for CaseMode {
    type Error = NgramError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(CaseMode::Sensitive),
            2 => Ok(CaseMode::Insensitive),
            other => Err(NgramError::InvalidCaseMode(other.to_string())),
        }
    }
}

impl FromStr for OrderPolicy {
    type Err = NgramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sort" | "1" => Ok(OrderPolicy::Sort),
            "preserve" | "2" => Ok(OrderPolicy::Preserve),
            _ => Err(NgramError::InvalidOrderPolicy(s.to_string())),
        }
    }
}

impl FromStr for CaseMode {
    type Err = NgramError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sensitive" | "1" => Ok(CaseMode::Sensitive),
            "insensitive" | "2" => Ok(CaseMode::Insensitive),
            _ => Err(NgramError::InvalidCaseMode(s.to_string())),
        }
    }
}

impl fmt::Display for OrderPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderPolicy::Sort => write!(f, "sort"),
            OrderPolicy::Preserve => write!(f, "preserve"),
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Sensitive => write!(f, "sensitive"),
            CaseMode::Insensitive => write!(f, "insensitive"),
        }
    }
}
