//! Experiment directories from TOML (`[paths]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where datasets are read from and results are written to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePathsConfig {
    /// Directory holding `<dataset>_test_prepared.jsonl` files
    pub data_dir: PathBuf,
    /// Directory for result, log and conversation files
    pub results_dir: PathBuf,
}

impl Default for FilePathsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("prepared_data"),
            results_dir: PathBuf::from("results"),
        }
    }
}
