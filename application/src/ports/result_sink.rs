//! Result sink port
//!
//! Where an experiment run writes its per-query output records.

use dialectic_domain::DebateRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResultSinkError {
    #[error("Failed to write result record: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize result record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only destination for output records.
///
/// Each `write` must leave a complete record behind, so a run interrupted
/// between writes still yields a readable prefix.
pub trait ResultSink: Send {
    fn write(&mut self, record: &DebateRecord) -> Result<(), ResultSinkError>;
}
