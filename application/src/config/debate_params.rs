//! Debate execution parameters.
//!
//! [`DebateParams`] groups the static knobs that control how a debate and
//! a batch of debates are scheduled. None of them change what a debate
//! produces, only how fast it gets there.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Scheduling parameters for [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase)
/// and [`RunExperimentUseCase`](crate::use_cases::run_experiment::RunExperimentUseCase).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateParams {
    /// Persona calls in flight at once within a Thesis or Rebuttal phase.
    pub seat_concurrency: usize,
    /// Debates in flight at once within a batch.
    pub debate_concurrency: usize,
    /// Upper bound on a single persona call. `None` waits forever.
    pub call_timeout: Option<Duration>,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            seat_concurrency: 1,
            debate_concurrency: 1,
            call_timeout: None,
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_seat_concurrency(mut self, n: usize) -> Self {
        self.seat_concurrency = n;
        self
    }

    pub fn with_debate_concurrency(mut self, n: usize) -> Self {
        self.debate_concurrency = n;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Zero is treated as one.
    pub fn effective_seat_concurrency(&self) -> usize {
        self.seat_concurrency.max(1)
    }

    /// Zero is treated as one.
    pub fn effective_debate_concurrency(&self) -> usize {
        self.debate_concurrency.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let params = DebateParams::default();
        assert_eq!(params.seat_concurrency, 1);
        assert_eq!(params.debate_concurrency, 1);
        assert!(params.call_timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let params = DebateParams::default()
            .with_seat_concurrency(4)
            .with_debate_concurrency(2)
            .with_call_timeout(Some(Duration::from_secs(120)));

        assert_eq!(params.seat_concurrency, 4);
        assert_eq!(params.debate_concurrency, 2);
        assert_eq!(params.call_timeout, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let params = DebateParams::default()
            .with_seat_concurrency(0)
            .with_debate_concurrency(0);
        assert_eq!(params.effective_seat_concurrency(), 1);
        assert_eq!(params.effective_debate_concurrency(), 1);
    }
}
