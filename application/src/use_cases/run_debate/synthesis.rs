//! Phase 3: the Judge adjudicates the transcript.

use super::RunDebateUseCase;
use super::types::RunDebateError;
use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::shared::check_cancelled;
use dialectic_domain::{
    DebatePromptTemplate, DebateTranscript, FinalAnswer, Phase, QueryContext, Role, Validated,
    validate,
};
use tracing::{debug, info, warn};

impl<P: PersonaInvoker + 'static> RunDebateUseCase<P> {
    pub(super) async fn phase_synthesis(
        &self,
        context: &QueryContext,
        transcript: &DebateTranscript,
        progress: &dyn ProgressNotifier,
    ) -> Result<FinalAnswer, RunDebateError> {
        info!("{}", Phase::Synthesis);
        progress.on_phase_start(&Phase::Synthesis, 1);

        let prompt = DebatePromptTemplate::synthesis(context.question().content(), transcript);
        debug!("Judge prompt: {} bytes", prompt.len());

        check_cancelled(&self.cancellation_token)?;
        let raw = self.personas.invoke(Role::Judge, &prompt).await?;

        let validated = validate::<FinalAnswer>(&raw);
        if let Validated::Sentinel { reason, .. } = &validated {
            warn!(
                query_id = context.query_id(),
                "FAILED to parse final answer, keeping raw text: {}", reason
            );
        }

        progress.on_task_complete(
            &Phase::Synthesis,
            Role::Judge.display_name(),
            !validated.is_sentinel(),
        );
        progress.on_phase_complete(&Phase::Synthesis);
        Ok(validated.into_record())
    }
}
