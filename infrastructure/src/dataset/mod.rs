//! Dataset input and run file layout.

mod loader;
mod paths;

pub use loader::{DatasetError, JsonlDatasetLoader, LoadedDataset, SkippedLine};
pub use paths::{ExperimentPaths, RUN_TIMESTAMP_FORMAT};
