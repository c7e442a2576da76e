//! Result line written for each processed query.

use crate::debate::transcript::{DebateOutcome, FinalAnswer};
use crate::query::context::QueryContext;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One line of the results file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DebateRecord {
    /// The debate ran to a terminal state (completed or aborted).
    Debated {
        query_id: String,
        question: String,
        gold_answers: Vec<String>,
        wrong_answers: Vec<String>,
        /// `{}` when the debate aborted before synthesis
        #[serde(serialize_with = "final_answer_or_empty")]
        final_answer_object: Option<FinalAnswer>,
        full_debate_transcript: DebateOutcome,
    },
    /// An unexpected error stopped the debate for this query.
    Failed { query_id: String, error: String },
}

impl DebateRecord {
    pub fn debated(context: &QueryContext, outcome: DebateOutcome) -> Self {
        DebateRecord::Debated {
            query_id: context.query_id().to_string(),
            question: context.question().content().to_string(),
            gold_answers: context.gold_answers().to_vec(),
            wrong_answers: context.wrong_answers().to_vec(),
            final_answer_object: outcome.final_answer().cloned(),
            full_debate_transcript: outcome,
        }
    }

    pub fn failed(query_id: impl Into<String>, error: impl ToString) -> Self {
        DebateRecord::Failed {
            query_id: query_id.into(),
            error: error.to_string(),
        }
    }

    pub fn query_id(&self) -> &str {
        match self {
            DebateRecord::Debated { query_id, .. } | DebateRecord::Failed { query_id, .. } => {
                query_id
            }
        }
    }

    pub fn outcome(&self) -> Option<&DebateOutcome> {
        match self {
            DebateRecord::Debated {
                full_debate_transcript,
                ..
            } => Some(full_debate_transcript),
            DebateRecord::Failed { .. } => None,
        }
    }
}

fn final_answer_or_empty<S>(answer: &Option<FinalAnswer>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match answer {
        Some(answer) => answer.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::question::Question;
    use crate::debate::transcript::{DebateTranscript, CHALLENGE_PARSE_ERROR};

    fn context() -> QueryContext {
        QueryContext::new("q1", Question::new("Who?"), vec![])
            .unwrap()
            .with_gold_answers(vec!["A".to_string()])
    }

    #[test]
    fn test_aborted_record_has_empty_final_answer_object() {
        let outcome = DebateOutcome::Aborted {
            error: CHALLENGE_PARSE_ERROR.to_string(),
            transcript: DebateTranscript::new(),
        };
        let record = DebateRecord::debated(&context(), outcome);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["final_answer_object"], serde_json::json!({}));
        assert_eq!(json["full_debate_transcript"]["error"], CHALLENGE_PARSE_ERROR);
        assert_eq!(json["gold_answers"], serde_json::json!(["A"]));
    }

    #[test]
    fn test_failed_record_shape() {
        let record = DebateRecord::failed("q9", "Timeout");
        assert_eq!(record.query_id(), "q9");
        assert!(record.outcome().is_none());
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"query_id":"q9","error":"Timeout"}"#
        );
    }
}
