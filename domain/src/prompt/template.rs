//! Per-phase prompt templates.
//!
//! Every prompt is a pure function of state already finalized by earlier
//! phases. Structured state is embedded as pretty-printed JSON.

use crate::debate::seat_map::SeatMap;
use crate::debate::transcript::{DebateTranscript, OpeningStatement};
use crate::query::context::Document;
use crate::query::seat::SeatId;
use serde::Serialize;

/// Templates for generating the user prompt of each phase
pub struct DebatePromptTemplate;

impl DebatePromptTemplate {
    /// Phase 1: one seat, one document.
    pub fn thesis(question: &str, document: &Document) -> String {
        format!(
            r#"Produce a structured thesis that answers the query using only the document below.

Query: "{question}"

Document (doc_id: {doc_id}):
---
{text}
---
"#,
            doc_id = document.doc_id,
            text = document.text,
        )
    }

    /// Phase 2a: every opening statement against every document.
    pub fn antithesis(
        question: &str,
        statements: &SeatMap<OpeningStatement>,
        documents: &[Document],
    ) -> String {
        format!(
            r#"You are the Devil's Advocate. Challenge the opening statements below, using the full set of source documents as evidence.

Original Query: "{question}"

--- OPENING STATEMENTS ---
{statements}
---

--- ALL SOURCE DOCUMENTS ---
{documents}
---
"#,
            statements = pretty(statements),
            documents = pretty(&documents),
        )
    }

    /// Phase 2b: one challenged seat answers its challenge.
    pub fn rebuttal(
        question: &str,
        seat: SeatId,
        document: &Document,
        opening: Option<&OpeningStatement>,
        challenge: &str,
    ) -> String {
        let opening = match opening {
            Some(statement) => pretty(statement),
            None => "{}".to_string(),
        };
        format!(
            r#"You are {agent}. You must rebut a direct challenge to your opening statement.

Follow the Structured Rebuttal Protocol exactly:
1. Acknowledge the challenge: restate its core in your own words.
2. Review the contradictory evidence: name the evidence from the other document(s) that the challenge cites.
3. Argue and justify, choosing exactly ONE stance:
   - DEFEND: your original evidence and reasoning are stronger.
   - CONCEDE: the contradictory evidence is stronger and your answer was wrong.
   - RECONCILE: both pieces of evidence can hold at once (for example, the query is ambiguous).
4. Final revised statement: give your updated answer and chain of thought in the required JSON format.

Context:
- Original Query: "{question}"
- Your Assigned Document (doc_id: {doc_id}): {text}
- Your Opening Statement: {opening}
- The Challenge You Must Address: "{challenge}"

Reply with a single JSON object: {{"answer": "...", "chain_of_thought": ["..."]}}
"#,
            agent = seat.agent_name(),
            doc_id = document.doc_id,
            text = document.text,
        )
    }

    /// Phase 3: the whole transcript so far.
    pub fn synthesis(question: &str, transcript: &DebateTranscript) -> String {
        format!(
            r#"You are the Aggregator-Judge. Below is the full record of a structured debate. Produce the final answer to the query, following your core instructions.

Original Query: "{question}"

--- DEBATE TRANSCRIPT ---
{transcript}
---

Reply with the final answer in the required JSON format.
"#,
            transcript = transcript.to_pretty_json(),
        )
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::transcript::{ChallengeSet, Statement};

    fn seat(n: usize) -> SeatId {
        SeatId::from_index(n - 1)
    }

    #[test]
    fn test_thesis_contains_only_its_document() {
        let doc = Document::new("d1", "Born in 1963.");
        let prompt = DebatePromptTemplate::thesis("When was he born?", &doc);
        assert!(prompt.contains("doc_id: d1"));
        assert!(prompt.contains("Born in 1963."));
        assert!(prompt.contains("\"When was he born?\""));
    }

    #[test]
    fn test_antithesis_lists_all_seats_and_documents() {
        let statements: SeatMap<_> = vec![
            (seat(1), Statement::new("1963", vec!["s".into()])),
            (seat(2), Statement::new("1956", vec!["s".into()])),
        ]
        .into_iter()
        .collect();
        let docs = vec![Document::new("d1", "one"), Document::new("d2", "two")];
        let prompt = DebatePromptTemplate::antithesis("Q?", &statements, &docs);
        assert!(prompt.contains("\"agent_1\""));
        assert!(prompt.contains("\"agent_2\""));
        assert!(prompt.contains("\"doc_id\": \"d2\""));
    }

    #[test]
    fn test_rebuttal_embeds_challenge_and_protocol() {
        let doc = Document::new("d3", "Born in 2099.");
        let opening = Statement::new("2099", vec![]);
        let prompt =
            DebatePromptTemplate::rebuttal("Q?", seat(3), &doc, Some(&opening), "2099 is impossible");
        assert!(prompt.starts_with("You are agent_3."));
        assert!(prompt.contains("\"2099 is impossible\""));
        assert!(prompt.contains("DEFEND"));
        assert!(prompt.contains("CONCEDE"));
        assert!(prompt.contains("RECONCILE"));
        assert!(prompt.contains("\"answer\": \"2099\""));
    }

    #[test]
    fn test_rebuttal_without_opening_uses_empty_object() {
        let doc = Document::new("d1", "x");
        let prompt = DebatePromptTemplate::rebuttal("Q?", seat(1), &doc, None, "c");
        assert!(prompt.contains("Your Opening Statement: {}"));
    }

    #[test]
    fn test_synthesis_embeds_transcript_so_far() {
        let mut transcript = DebateTranscript::new();
        transcript.record_opening_statements(
            [(seat(1), Statement::new("1963", vec![]))].into_iter().collect(),
        );
        transcript.record_challenges(ChallengeSet::new().with("agent_1_challenge", "why?"));
        transcript.record_rebuttals(SeatMap::new());
        let prompt = DebatePromptTemplate::synthesis("Q?", &transcript);
        assert!(prompt.contains("\"phase_1_opening_statements\""));
        assert!(prompt.contains("\"agent_1_challenge\": \"why?\""));
        assert!(prompt.contains("\"phase_2b_rebuttals\": {}"));
        assert!(!prompt.contains("phase_3_final_answer"));
    }
}
