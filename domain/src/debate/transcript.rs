//! Debate transcript value objects.
//!
//! These types are both what the personas must emit (decoded by
//! [`crate::validation`]) and what the audit transcript records:
//!
//! - [`Statement`] - `{answer, chain_of_thought}`; an [`OpeningStatement`]
//!   in phase 1 and a [`Rebuttal`] in phase 2b
//! - [`ChallengeSet`] - `agent_{i}_challenge -> text` from phase 2a
//! - [`FinalAnswer`] - `{final_answer}` from phase 3
//! - [`DebateTranscript`] - the append-only aggregate
//! - [`DebateOutcome`] - a completed or aborted transcript

use crate::debate::entities::{DebateState, Phase};
use crate::debate::seat_map::SeatMap;
use crate::query::seat::SeatId;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Answer placed in a sentinel statement when the persona output did not decode.
pub const JSON_PARSE_ERROR: &str = "JSON_PARSE_ERROR";

/// Error recorded when the Challenger output is not a mapping at all.
pub const CHALLENGE_PARSE_ERROR: &str = "Failed to parse Devil's Advocate challenges.";

/// Answer-shaped record: a thesis or a revised thesis.
///
/// Fields the model added beyond the two required ones are kept in `extra`
/// and serialized after them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub answer: String,
    pub chain_of_thought: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Phase 1 record, immutable once Thesis completes.
pub type OpeningStatement = Statement;

/// Phase 2b record; a new record, never a mutation of the opening statement.
pub type Rebuttal = Statement;

impl Statement {
    pub fn new(answer: impl Into<String>, chain_of_thought: Vec<String>) -> Self {
        Self {
            answer: answer.into(),
            chain_of_thought,
            extra: Map::new(),
        }
    }

    /// Sentinel substituted for an undecodable response; carries the raw text.
    pub fn parse_error(raw: impl Into<String>) -> Self {
        Self::new(JSON_PARSE_ERROR, vec![raw.into()])
    }

    pub fn is_parse_error(&self) -> bool {
        self.answer == JSON_PARSE_ERROR
    }
}

/// The Judge's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAnswer {
    pub final_answer: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FinalAnswer {
    pub fn new(final_answer: impl Into<String>) -> Self {
        Self {
            final_answer: final_answer.into(),
            extra: Map::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.final_answer
    }
}

/// Challenges keyed `agent_{i}_challenge`, in the order the Challenger wrote them.
///
/// A seat may legitimately be absent. Keys that do not address a seat are
/// kept for the audit trail but never trigger a rebuttal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeSet {
    entries: Vec<(String, String)>,
}

impl ChallengeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a challenge; a repeated key replaces the earlier text in place.
    pub fn insert(&mut self, key: impl Into<String>, challenge: impl Into<String>) {
        let key = key.into();
        let challenge = challenge.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = challenge,
            None => self.entries.push((key, challenge)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, challenge: impl Into<String>) -> Self {
        self.insert(key, challenge);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Challenge addressed to a seat, if any.
    pub fn for_seat(&self, seat: SeatId) -> Option<&str> {
        self.get(&seat.challenge_key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Serialize for ChallengeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, challenge) in &self.entries {
            map.serialize_entry(key, challenge)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChallengeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ChallengeSetVisitor;

        impl<'de> Visitor<'de> for ChallengeSetVisitor {
            type Value = ChallengeSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object mapping challenge keys to challenge text")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = ChallengeSet::new();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    // A non-text entry is kept as its JSON text rather than failing the set.
                    let text = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    set.insert(key, text);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ChallengeSetVisitor)
    }
}

/// Append-only debate transcript.
///
/// Phases populate strictly left to right; a later phase's prompt is built
/// only from fields already recorded here. Absent phases are omitted from
/// the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebateTranscript {
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_1_opening_statements: Option<SeatMap<OpeningStatement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_2a_challenges: Option<ChallengeSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_2b_rebuttals: Option<SeatMap<Rebuttal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phase_3_final_answer: Option<FinalAnswer>,
}

impl DebateTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last phase whose output has been recorded.
    pub fn last_recorded_phase(&self) -> Option<Phase> {
        if self.phase_3_final_answer.is_some() {
            Some(Phase::Synthesis)
        } else if self.phase_2b_rebuttals.is_some() {
            Some(Phase::Rebuttal)
        } else if self.phase_2a_challenges.is_some() {
            Some(Phase::Antithesis)
        } else if self.phase_1_opening_statements.is_some() {
            Some(Phase::Thesis)
        } else {
            None
        }
    }

    fn assert_next(&self, phase: Phase) {
        debug_assert_eq!(
            self.last_recorded_phase(),
            phase.previous(),
            "{} recorded out of order",
            phase
        );
    }

    pub fn record_opening_statements(&mut self, statements: SeatMap<OpeningStatement>) {
        self.assert_next(Phase::Thesis);
        self.phase_1_opening_statements = Some(statements);
    }

    pub fn record_challenges(&mut self, challenges: ChallengeSet) {
        self.assert_next(Phase::Antithesis);
        self.phase_2a_challenges = Some(challenges);
    }

    pub fn record_rebuttals(&mut self, rebuttals: SeatMap<Rebuttal>) {
        self.assert_next(Phase::Rebuttal);
        self.phase_2b_rebuttals = Some(rebuttals);
    }

    pub fn record_final_answer(&mut self, answer: FinalAnswer) {
        self.assert_next(Phase::Synthesis);
        self.phase_3_final_answer = Some(answer);
    }

    pub fn opening_statements(&self) -> Option<&SeatMap<OpeningStatement>> {
        self.phase_1_opening_statements.as_ref()
    }

    pub fn challenges(&self) -> Option<&ChallengeSet> {
        self.phase_2a_challenges.as_ref()
    }

    pub fn rebuttals(&self) -> Option<&SeatMap<Rebuttal>> {
        self.phase_2b_rebuttals.as_ref()
    }

    pub fn final_answer(&self) -> Option<&FinalAnswer> {
        self.phase_3_final_answer.as_ref()
    }

    /// Pretty JSON as quoted into later-phase prompts.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// How a debate ended.
///
/// Serializes as the flat transcript when completed and as
/// `{"error": ..., "transcript": {...}}` when aborted.
#[derive(Debug, Clone, PartialEq)]
pub enum DebateOutcome {
    Completed(DebateTranscript),
    Aborted {
        error: String,
        transcript: DebateTranscript,
    },
}

impl DebateOutcome {
    pub fn state(&self) -> DebateState {
        match self {
            DebateOutcome::Completed(_) => DebateState::Completed,
            DebateOutcome::Aborted { .. } => DebateState::Aborted,
        }
    }

    pub fn transcript(&self) -> &DebateTranscript {
        match self {
            DebateOutcome::Completed(transcript) => transcript,
            DebateOutcome::Aborted { transcript, .. } => transcript,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DebateOutcome::Completed(_) => None,
            DebateOutcome::Aborted { error, .. } => Some(error),
        }
    }

    pub fn final_answer(&self) -> Option<&FinalAnswer> {
        self.transcript().final_answer()
    }

    pub fn is_completed(&self) -> bool {
        self.state() == DebateState::Completed
    }
}

impl Serialize for DebateOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DebateOutcome::Completed(transcript) => transcript.serialize(serializer),
            DebateOutcome::Aborted { error, transcript } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", error)?;
                map.serialize_entry("transcript", transcript)?;
                map.end()
            }
        }
    }
}
