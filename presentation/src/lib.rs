//! Presentation layer for dialectic-rag
//!
//! This crate contains the CLI definition, progress reporters and the
//! console run summary.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, DatasetArg};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
