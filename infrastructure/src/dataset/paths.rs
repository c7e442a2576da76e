//! File layout of one experiment run.

use chrono::{DateTime, Local};
use dialectic_domain::DatasetName;
use std::path::{Path, PathBuf};

/// Timestamp format shared by every file of a run.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Input and output paths for one dataset run, stamped with its start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperimentPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log: PathBuf,
    pub conversation_log: PathBuf,
}

impl ExperimentPaths {
    pub fn new(
        data_dir: &Path,
        results_dir: &Path,
        dataset: DatasetName,
        started_at: DateTime<Local>,
    ) -> Self {
        let stamp = started_at.format(RUN_TIMESTAMP_FORMAT).to_string();
        Self {
            input: data_dir.join(dataset.prepared_file_name()),
            output: results_dir.join(format!("{}_results_{}.jsonl", dataset, stamp)),
            log: results_dir.join(format!("experiment_log_{}.log", stamp)),
            conversation_log: results_dir.join(format!("conversation_{}.jsonl", stamp)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_layout() {
        let started_at = Local.with_ymd_and_hms(2025, 3, 9, 14, 5, 7).unwrap();
        let paths = ExperimentPaths::new(
            Path::new("prepared_data"),
            Path::new("results"),
            DatasetName::FaithEval,
            started_at,
        );

        assert_eq!(
            paths.input,
            PathBuf::from("prepared_data/faitheval_test_prepared.jsonl")
        );
        assert_eq!(
            paths.output,
            PathBuf::from("results/faitheval_results_20250309_140507.jsonl")
        );
        assert_eq!(
            paths.log,
            PathBuf::from("results/experiment_log_20250309_140507.log")
        );
        assert_eq!(
            paths.conversation_log,
            PathBuf::from("results/conversation_20250309_140507.jsonl")
        );
    }
}
