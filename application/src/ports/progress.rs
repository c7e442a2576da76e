//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate and over
//! an experiment batch.

use dialectic_domain::{DebateState, Phase};

/// Callback for progress updates during debate execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain log lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &Phase, total_tasks: usize);

    /// Called when a role call completes within a phase
    ///
    /// `label` is the seat name (`agent_2`) or the role name.
    fn on_task_complete(&self, phase: &Phase, label: &str, success: bool);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &Phase);

    // ==================== Batch Callbacks ====================

    /// Called once before the first debate of a batch.
    fn on_batch_start(&self, _total_queries: usize) {}

    /// Called when a query produced its output record.
    ///
    /// `state` is `None` when the query failed before a debate outcome existed.
    fn on_query_complete(&self, _query_id: &str, _state: Option<DebateState>) {}

    /// Called once after the last record was written.
    fn on_batch_complete(&self) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &Phase, _label: &str, _success: bool) {}
    fn on_phase_complete(&self, _phase: &Phase) {}
}
