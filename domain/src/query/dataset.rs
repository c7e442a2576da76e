//! Dataset selector for batch runs.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prepared datasets a batch run can be pointed at (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetName {
    /// Ambiguous-entity questions with several valid answers
    AmbigDocs,
    /// Questions over counterfactual or unanswerable contexts
    FaithEval,
    /// Retrieval with ambiguity and misinformation mixed in
    RamDocs,
}

impl DatasetName {
    pub const ALL: [DatasetName; 3] = [Self::AmbigDocs, Self::FaithEval, Self::RamDocs];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmbigDocs => "ambigdocs",
            Self::FaithEval => "faitheval",
            Self::RamDocs => "ramdocs",
        }
    }

    /// File name of the prepared test split (`ramdocs_test_prepared.jsonl`).
    pub fn prepared_file_name(&self) -> String {
        format!("{}_test_prepared.jsonl", self.as_str())
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DatasetName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::UnknownDataset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_file_name() {
        assert_eq!(
            DatasetName::RamDocs.prepared_file_name(),
            "ramdocs_test_prepared.jsonl"
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("AmbigDocs".parse::<DatasetName>().unwrap(), DatasetName::AmbigDocs);
        assert!("squad".parse::<DatasetName>().is_err());
    }
}
