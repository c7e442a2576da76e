//! Phase 1: every seat states a thesis from its own document.

use super::RunDebateUseCase;
use super::types::RunDebateError;
use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::ProgressNotifier;
use dialectic_domain::{DebatePromptTemplate, OpeningStatement, Phase, QueryContext, SeatMap};
use tracing::info;

impl<P: PersonaInvoker + 'static> RunDebateUseCase<P> {
    pub(super) async fn phase_thesis(
        &self,
        context: &QueryContext,
        progress: &dyn ProgressNotifier,
    ) -> Result<SeatMap<OpeningStatement>, RunDebateError> {
        let question = context.question().content();
        let prompts: Vec<_> = context
            .seats()
            .map(|(seat, document)| (seat, DebatePromptTemplate::thesis(question, document)))
            .collect();

        info!("{} ({} seats)", Phase::Thesis, prompts.len());
        progress.on_phase_start(&Phase::Thesis, prompts.len());

        let statements = self.run_seats(Phase::Thesis, prompts, progress).await?;

        progress.on_phase_complete(&Phase::Thesis);
        Ok(statements)
    }
}
