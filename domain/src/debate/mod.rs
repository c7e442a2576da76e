//! Debate domain
//!
//! Phases of the dialectical debate and the append-only transcript they
//! produce. See [`transcript::DebateTranscript`] for the ordering invariant.

pub mod entities;
pub mod record;
pub mod seat_map;
pub mod transcript;

pub use entities::{DebateState, Phase};
pub use record::DebateRecord;
pub use seat_map::SeatMap;
pub use transcript::{
    ChallengeSet, DebateOutcome, DebateTranscript, FinalAnswer, OpeningStatement, Rebuttal,
    Statement, CHALLENGE_PARSE_ERROR, JSON_PARSE_ERROR,
};
