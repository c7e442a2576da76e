//! Type definitions for the RunDebate use case.

use crate::ports::llm_gateway::GatewayError;
use crate::use_cases::shared::Cancelled;
use thiserror::Error;

/// Errors that end a debate without an outcome
///
/// A malformed challenge set is not an error here: it is the
/// [`Aborted`](dialectic_domain::DebateOutcome::Aborted) outcome.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RunDebateError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunDebateError::Cancelled)
    }
}

impl From<Cancelled> for RunDebateError {
    fn from(_: Cancelled) -> Self {
        RunDebateError::Cancelled
    }
}
