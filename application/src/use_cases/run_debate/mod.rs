//! Run Debate use case
//!
//! Drives one [`QueryContext`] through the four debate phases:
//!
//! | Phase              | Role       | Calls            | On malformed output       |
//! |--------------------|------------|------------------|---------------------------|
//! | 1. Thesis          | Proponent  | one per seat     | seat sentinel, continue   |
//! | 2a. Antithesis     | Challenger | one              | abort with phase 1 only   |
//! | 2b. Rebuttal       | Proponent  | challenged seats | seat sentinel, continue   |
//! | 3. Synthesis       | Judge      | one              | raw text as final answer  |
//!
//! Phases run strictly in order. Within Thesis and Rebuttal, seat calls may
//! overlap up to `seat_concurrency`, but results are always collected in
//! seat order, so the transcript does not depend on the setting.

mod antithesis;
mod rebuttal;
mod synthesis;
mod thesis;
mod types;

pub use types::RunDebateError;

use crate::config::DebateParams;
use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::shared::check_cancelled;
use dialectic_domain::{
    CHALLENGE_PARSE_ERROR, DebateOutcome, DebateTranscript, Phase, QueryContext, Role, SeatId,
    SeatMap, Statement, Validated, validate,
};
use futures::{StreamExt, TryStreamExt, stream};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Use case for running a single debate
pub struct RunDebateUseCase<P: PersonaInvoker + 'static> {
    personas: Arc<P>,
    params: DebateParams,
    cancellation_token: Option<CancellationToken>,
}

impl<P: PersonaInvoker + 'static> Clone for RunDebateUseCase<P> {
    fn clone(&self) -> Self {
        Self {
            personas: Arc::clone(&self.personas),
            params: self.params.clone(),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<P: PersonaInvoker + 'static> RunDebateUseCase<P> {
    pub fn new(personas: Arc<P>) -> Self {
        Self {
            personas,
            params: DebateParams::default(),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    /// Set a cancellation token, checked at every phase boundary
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn params(&self) -> &DebateParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, context: &QueryContext) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(context, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Returns `Ok` for both completed and aborted debates. `Err` means the
    /// debate produced no outcome: a persona call failed, or the run was
    /// cancelled.
    pub async fn execute_with_progress(
        &self,
        context: &QueryContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<DebateOutcome, RunDebateError> {
        info!(
            query_id = context.query_id(),
            "Starting debate with {} seats",
            context.documents().len()
        );

        check_cancelled(&self.cancellation_token)?;
        let statements = self.phase_thesis(context, progress).await?;

        check_cancelled(&self.cancellation_token)?;
        let challenges = self
            .phase_antithesis(context, &statements, progress)
            .await?;

        let mut transcript = DebateTranscript::new();
        let Some(challenges) = challenges else {
            transcript.record_opening_statements(statements);
            return Ok(DebateOutcome::Aborted {
                error: CHALLENGE_PARSE_ERROR.to_string(),
                transcript,
            });
        };

        check_cancelled(&self.cancellation_token)?;
        let rebuttals = self
            .phase_rebuttal(context, &statements, &challenges, progress)
            .await?;

        transcript.record_opening_statements(statements);
        transcript.record_challenges(challenges);
        transcript.record_rebuttals(rebuttals);

        check_cancelled(&self.cancellation_token)?;
        let final_answer = self
            .phase_synthesis(context, &transcript, progress)
            .await?;
        transcript.record_final_answer(final_answer);

        info!(query_id = context.query_id(), "Debate completed");
        Ok(DebateOutcome::Completed(transcript))
    }

    /// Run one Proponent call per seat and collect the records in seat order.
    async fn run_seats(
        &self,
        phase: Phase,
        prompts: Vec<(SeatId, String)>,
        progress: &dyn ProgressNotifier,
    ) -> Result<SeatMap<Statement>, RunDebateError> {
        let calls = prompts
            .into_iter()
            .map(|(seat, prompt)| self.seat_call(phase, seat, prompt, progress));

        let replies: Vec<(SeatId, Validated<Statement>)> = stream::iter(calls)
            .buffered(self.params.effective_seat_concurrency())
            .try_collect()
            .await?;

        let mut statements = SeatMap::new();
        for (seat, validated) in replies {
            if let Validated::Sentinel { reason, .. } = &validated {
                warn!("FAILED to parse JSON from {} in {}: {}", seat, phase, reason);
            }
            statements.insert(seat, validated.into_record());
        }
        Ok(statements)
    }

    async fn seat_call(
        &self,
        phase: Phase,
        seat: SeatId,
        prompt: String,
        progress: &dyn ProgressNotifier,
    ) -> Result<(SeatId, Validated<Statement>), RunDebateError> {
        check_cancelled(&self.cancellation_token)?;
        debug!("{} prompt for {}: {} bytes", phase, seat, prompt.len());

        let raw = self.personas.invoke(Role::Proponent, &prompt).await?;
        let validated = validate::<Statement>(&raw);

        progress.on_task_complete(&phase, &seat.agent_name(), !validated.is_sentinel());
        Ok((seat, validated))
    }
}
