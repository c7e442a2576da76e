//! Run Experiment use case
//!
//! Runs a debate for every [`QueryContext`] of a dataset and writes one
//! output record per entry, in input order. A debate that fails for any
//! reason other than cancellation, panics included, becomes an error record
//! and the batch moves on. So does an entry the dataset reader rejected.

use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::ports::result_sink::{ResultSink, ResultSinkError};
use crate::use_cases::run_debate::RunDebateUseCase;
use dialectic_domain::{AnswerEvaluation, DebateOutcome, DebateRecord, DebateState, QueryContext};
use futures::{StreamExt, stream};
use serde::Serialize;
use std::pin::pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Errors that stop the whole batch
#[derive(Error, Debug)]
pub enum RunExperimentError {
    #[error("Result sink error: {0}")]
    Sink(#[from] ResultSinkError),
}

/// One entry of a batch, in dataset order
#[derive(Debug, Clone)]
pub enum ExperimentItem {
    Debate(QueryContext),
    /// Names a query but cannot be debated; written as an error record.
    Rejected { query_id: String, reason: String },
}

impl ExperimentItem {
    pub fn query_id(&self) -> &str {
        match self {
            ExperimentItem::Debate(context) => context.query_id(),
            ExperimentItem::Rejected { query_id, .. } => query_id,
        }
    }
}

impl From<QueryContext> for ExperimentItem {
    fn from(context: QueryContext) -> Self {
        ExperimentItem::Debate(context)
    }
}

/// Tally of one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperimentSummary {
    /// Entries handed to the batch.
    pub total: usize,
    pub completed: usize,
    pub aborted: usize,
    /// Error records written.
    pub failed: usize,
    /// Debates with a final answer and at least one gold answer to compare.
    pub evaluated: usize,
    pub gold_hits: usize,
    pub wrong_mentions: usize,
    /// The run stopped early on request.
    pub cancelled: bool,
}

impl ExperimentSummary {
    /// Records written so far.
    pub fn written(&self) -> usize {
        self.completed + self.aborted + self.failed
    }

    fn tally(&mut self, context: &QueryContext, outcome: &DebateOutcome) {
        match outcome.state() {
            DebateState::Completed => self.completed += 1,
            DebateState::Aborted => self.aborted += 1,
        }

        if context.gold_answers().is_empty() {
            return;
        }
        if let Some(answer) = outcome.final_answer() {
            let evaluation = AnswerEvaluation::evaluate(context, answer.text());
            self.evaluated += 1;
            if evaluation.answer_matches_gold() {
                self.gold_hits += 1;
            }
            if evaluation.mentions_wrong() {
                self.wrong_mentions += 1;
            }
        }
    }
}

/// How one isolated debate task ended.
enum DebateRun {
    Finished(QueryContext, DebateOutcome),
    Failed { query_id: String, error: String },
    Rejected { query_id: String, reason: String },
    Cancelled,
}

/// Use case for running a batch of debates
pub struct RunExperimentUseCase<P: PersonaInvoker + 'static> {
    debate: RunDebateUseCase<P>,
    cancellation_token: Option<CancellationToken>,
}

impl<P: PersonaInvoker + 'static> RunExperimentUseCase<P> {
    pub fn new(debate: RunDebateUseCase<P>) -> Self {
        Self {
            debate,
            cancellation_token: None,
        }
    }

    /// Set a cancellation token for the batch and every debate in it
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.debate = self.debate.with_cancellation(token.clone());
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute<I: Into<ExperimentItem>>(
        &self,
        items: Vec<I>,
        sink: &mut dyn ResultSink,
    ) -> Result<ExperimentSummary, RunExperimentError> {
        self.execute_with_progress(items, sink, Arc::new(NoProgress))
            .await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Records reach `sink` in input order even when debates overlap.
    pub async fn execute_with_progress<I: Into<ExperimentItem>>(
        &self,
        items: Vec<I>,
        sink: &mut dyn ResultSink,
        progress: Arc<dyn ProgressNotifier>,
    ) -> Result<ExperimentSummary, RunExperimentError> {
        let total = items.len();
        let concurrency = self.debate.params().effective_debate_concurrency();
        info!(
            "Running {} debates (debate concurrency {})",
            total, concurrency
        );
        progress.on_batch_start(total);

        let mut summary = ExperimentSummary {
            total,
            ..Default::default()
        };

        let runs = items
            .into_iter()
            .map(|item| self.run_item(item.into(), Arc::clone(&progress)));
        let mut runs = pin!(stream::iter(runs).buffered(concurrency));

        while let Some(run) = runs.next().await {
            let (record, state) = match run {
                DebateRun::Finished(context, outcome) => {
                    summary.tally(&context, &outcome);
                    let state = outcome.state();
                    if state == DebateState::Aborted {
                        warn!(query_id = context.query_id(), "Debate aborted");
                    }
                    (DebateRecord::debated(&context, outcome), Some(state))
                }
                DebateRun::Failed { query_id, error } => {
                    error!(query_id = %query_id, "Debate failed: {}", error);
                    summary.failed += 1;
                    (DebateRecord::failed(query_id, error), None)
                }
                DebateRun::Rejected { query_id, reason } => {
                    warn!(query_id = %query_id, "Dataset entry rejected: {}", reason);
                    summary.failed += 1;
                    (DebateRecord::failed(query_id, reason), None)
                }
                DebateRun::Cancelled => {
                    warn!(
                        "Run cancelled after {} of {} records",
                        summary.written(),
                        total
                    );
                    summary.cancelled = true;
                    break;
                }
            };

            sink.write(&record)?;
            progress.on_query_complete(record.query_id(), state);
        }

        progress.on_batch_complete();
        info!(
            "Batch finished: {} completed, {} aborted, {} failed",
            summary.completed, summary.aborted, summary.failed
        );
        Ok(summary)
    }

    async fn run_item(&self, item: ExperimentItem, progress: Arc<dyn ProgressNotifier>) -> DebateRun {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return DebateRun::Cancelled;
        }

        match item {
            ExperimentItem::Debate(context) => self.run_isolated(context, progress).await,
            ExperimentItem::Rejected { query_id, reason } => DebateRun::Rejected { query_id, reason },
        }
    }

    /// Run one debate on its own task so a panic stays contained.
    async fn run_isolated(
        &self,
        context: QueryContext,
        progress: Arc<dyn ProgressNotifier>,
    ) -> DebateRun {
        let query_id = context.query_id().to_string();
        let debate = self.debate.clone();
        let handle = tokio::spawn(async move {
            let result = debate
                .execute_with_progress(&context, progress.as_ref())
                .await;
            (context, result)
        });

        match handle.await {
            Ok((context, Ok(outcome))) => DebateRun::Finished(context, outcome),
            Ok((_, Err(e))) if e.is_cancelled() => DebateRun::Cancelled,
            Ok((_, Err(e))) => DebateRun::Failed {
                query_id,
                error: e.to_string(),
            },
            Err(e) => DebateRun::Failed {
                query_id,
                error: join_error_message(e),
            },
        }
    }
}

fn join_error_message(e: JoinError) -> String {
    if !e.is_panic() {
        return format!("Debate task failed: {e}");
    }
    let payload = e.into_panic();
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("Debate task panicked: {detail}")
}
