//! Phase 2b: challenged seats answer their challenge.

use super::RunDebateUseCase;
use super::types::RunDebateError;
use crate::ports::persona::PersonaInvoker;
use crate::ports::progress::ProgressNotifier;
use dialectic_domain::{
    ChallengeSet, DebatePromptTemplate, OpeningStatement, Phase, QueryContext, Rebuttal, SeatId,
    SeatMap,
};
use tracing::{debug, info};

impl<P: PersonaInvoker + 'static> RunDebateUseCase<P> {
    pub(super) async fn phase_rebuttal(
        &self,
        context: &QueryContext,
        statements: &SeatMap<OpeningStatement>,
        challenges: &ChallengeSet,
        progress: &dyn ProgressNotifier,
    ) -> Result<SeatMap<Rebuttal>, RunDebateError> {
        let question = context.question().content();

        let mut prompts = Vec::new();
        for (seat, document) in context.seats() {
            let Some(challenge) = challenges.for_seat(seat) else {
                info!("No challenge for {}, skipping rebuttal", seat);
                continue;
            };
            let prompt = DebatePromptTemplate::rebuttal(
                question,
                seat,
                document,
                statements.get(seat),
                challenge,
            );
            prompts.push((seat, prompt));
        }

        for (key, _) in challenges.iter() {
            if !addresses_seat(key, context) {
                debug!("Ignoring challenge key {} with no matching seat", key);
            }
        }

        info!("{} ({} challenged seats)", Phase::Rebuttal, prompts.len());
        progress.on_phase_start(&Phase::Rebuttal, prompts.len());

        let rebuttals = self.run_seats(Phase::Rebuttal, prompts, progress).await?;

        progress.on_phase_complete(&Phase::Rebuttal);
        Ok(rebuttals)
    }
}

fn addresses_seat(key: &str, context: &QueryContext) -> bool {
    key.strip_suffix("_challenge")
        .and_then(SeatId::parse_agent_name)
        .is_some_and(|seat| context.document_for(seat).is_some())
}
