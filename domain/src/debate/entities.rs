//! Debate domain entities

use serde::{Deserialize, Serialize};

/// Phase of a debate, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Every seat states a thesis from its single document
    Thesis,
    /// The Challenger cross-examines all theses against all documents
    Antithesis,
    /// Challenged seats defend, concede or reconcile
    Rebuttal,
    /// The Judge adjudicates the full transcript
    Synthesis,
}

impl Phase {
    pub const ORDER: [Phase; 4] = [
        Phase::Thesis,
        Phase::Antithesis,
        Phase::Rebuttal,
        Phase::Synthesis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Thesis => "thesis",
            Phase::Antithesis => "antithesis",
            Phase::Rebuttal => "rebuttal",
            Phase::Synthesis => "synthesis",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Thesis => "Phase 1: Thesis",
            Phase::Antithesis => "Phase 2a: Antithesis",
            Phase::Rebuttal => "Phase 2b: Rebuttal",
            Phase::Synthesis => "Phase 3: Synthesis",
        }
    }

    /// Transcript field this phase populates.
    pub fn transcript_key(&self) -> &'static str {
        match self {
            Phase::Thesis => "phase_1_opening_statements",
            Phase::Antithesis => "phase_2a_challenges",
            Phase::Rebuttal => "phase_2b_rebuttals",
            Phase::Synthesis => "phase_3_final_answer",
        }
    }

    /// The phase that must be finalized before this one may start.
    pub fn previous(&self) -> Option<Phase> {
        match self {
            Phase::Thesis => None,
            Phase::Antithesis => Some(Phase::Thesis),
            Phase::Rebuttal => Some(Phase::Antithesis),
            Phase::Synthesis => Some(Phase::Rebuttal),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Terminal state of a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateState {
    /// All four phases ran
    Completed,
    /// The challenge set could not be decoded; only phase 1 exists
    Aborted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_matches_previous() {
        for pair in Phase::ORDER.windows(2) {
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
        assert_eq!(Phase::Thesis.previous(), None);
    }

    #[test]
    fn test_transcript_keys() {
        let keys: Vec<_> = Phase::ORDER.iter().map(|p| p.transcript_key()).collect();
        assert_eq!(
            keys,
            vec![
                "phase_1_opening_statements",
                "phase_2a_challenges",
                "phase_2b_rebuttals",
                "phase_3_final_answer"
            ]
        );
    }
}
