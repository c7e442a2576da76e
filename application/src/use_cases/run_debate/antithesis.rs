//! Phase 2a: one Challenger call over every thesis and every document.

use super::RunDebateUseCase;
use super::types::RunDebateError;
use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::ProgressNotifier;
use crate::use_cases::shared::check_cancelled;
use dialectic_domain::{
    ChallengeSet, DebatePromptTemplate, OpeningStatement, Phase, QueryContext, Role, SeatMap,
    parse_challenges,
};
use tracing::{debug, error, info};

impl<P: PersonaInvoker + 'static> RunDebateUseCase<P> {
    /// Returns `None` when the Challenger output is not a mapping at all.
    pub(super) async fn phase_antithesis(
        &self,
        context: &QueryContext,
        statements: &SeatMap<OpeningStatement>,
        progress: &dyn ProgressNotifier,
    ) -> Result<Option<ChallengeSet>, RunDebateError> {
        info!("{}", Phase::Antithesis);
        progress.on_phase_start(&Phase::Antithesis, 1);

        let prompt = DebatePromptTemplate::antithesis(
            context.question().content(),
            statements,
            context.documents(),
        );
        debug!("Challenger prompt: {} bytes", prompt.len());

        check_cancelled(&self.cancellation_token)?;
        let raw = self.personas.invoke(Role::Challenger, &prompt).await?;

        let challenges = match parse_challenges(&raw) {
            Ok(challenges) => {
                info!("Challenger raised {} challenge(s)", challenges.len());
                Some(challenges)
            }
            Err(e) => {
                error!(
                    query_id = context.query_id(),
                    "FAILED to parse challenges: {}", e
                );
                None
            }
        };

        progress.on_task_complete(
            &Phase::Antithesis,
            Role::Challenger.display_name(),
            challenges.is_some(),
        );
        progress.on_phase_complete(&Phase::Antithesis);
        Ok(challenges)
    }
}
