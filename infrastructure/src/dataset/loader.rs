//! Line-delimited JSON dataset reader.

use dialectic_application::ExperimentItem;
use dialectic_domain::QueryContext;
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A line that could not be turned into a [`QueryContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Set when the line still names its query; such lines stay in the
    /// batch as error records.
    pub query_id: Option<String>,
    pub reason: String,
}

/// Batch entries in file order, plus what was skipped.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub entries: Vec<ExperimentItem>,
    pub skipped: Vec<SkippedLine>,
}

impl LoadedDataset {
    /// Entries that will be debated.
    pub fn contexts(&self) -> impl Iterator<Item = &QueryContext> {
        self.entries.iter().filter_map(|entry| match entry {
            ExperimentItem::Debate(context) => Some(context),
            ExperimentItem::Rejected { .. } => None,
        })
    }
}

/// Reads a prepared dataset, one [`QueryContext`] per line.
///
/// Blank lines are ignored. A line that fails to decode, bad UTF-8
/// included, is logged and skipped; it never stops the load. When the line
/// still carries a `query_id` it becomes an [`ExperimentItem::Rejected`].
pub struct JsonlDatasetLoader;

impl JsonlDatasetLoader {
    pub fn load(path: &Path) -> Result<LoadedDataset, DatasetError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
            _ => DatasetError::Io {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        Self::read(BufReader::new(file), path)
    }

    fn read(reader: impl BufRead, path: &Path) -> Result<LoadedDataset, DatasetError> {
        let mut entries = Vec::new();
        let mut skipped = Vec::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|source| DatasetError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim_ascii().is_empty() {
                continue;
            }
            match serde_json::from_slice::<QueryContext>(&line) {
                Ok(context) => entries.push(ExperimentItem::Debate(context)),
                Err(e) => {
                    let line_no = index + 1;
                    let query_id = recover_query_id(&line);
                    warn!(
                        path = %path.display(),
                        line = line_no,
                        query_id = query_id.as_deref().unwrap_or("-"),
                        "Skipping malformed dataset line: {}", e
                    );
                    if let Some(query_id) = &query_id {
                        entries.push(ExperimentItem::Rejected {
                            query_id: query_id.clone(),
                            reason: format!("Invalid dataset line {}: {}", line_no, e),
                        });
                    }
                    skipped.push(SkippedLine {
                        line: line_no,
                        query_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Loaded {} entries from {} ({} skipped)",
            entries.len(),
            path.display(),
            skipped.len()
        );
        Ok(LoadedDataset { entries, skipped })
    }
}

/// The `query_id` of a line that is valid JSON but not a valid context.
fn recover_query_id(line: &[u8]) -> Option<String> {
    match serde_json::from_slice::<Value>(line).ok()?.get("query_id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
