//! Shared utilities for use cases.

use tokio_util::sync::CancellationToken;

/// The run was asked to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cancelled;

/// Check if cancellation has been requested.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), Cancelled> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(Cancelled);
    }
    Ok(())
}
