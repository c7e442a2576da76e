//! Domain layer for dialectic-rag
//!
//! This crate contains the debate's value objects, the transcript, the
//! role constitutions and prompt templates, and response validation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Seats
//!
//! Every document in a [`QueryContext`] gets a seat, numbered by position
//! (`agent_1`, `agent_2`, ...). A Proponent argues each seat from that one
//! document.
//!
//! ## Phases
//!
//! - **Thesis**: one opening statement per seat
//! - **Antithesis**: one Challenger call over every thesis and document
//! - **Rebuttal**: each challenged seat defends, concedes or reconciles
//! - **Synthesis**: the Judge reads the transcript and answers
//!
//! ## Failure asymmetry
//!
//! A malformed statement degrades one seat (sentinel record); a malformed
//! challenge set aborts the debate, since every later phase depends on it.

pub mod config;
pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;
pub mod query;
pub mod validation;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{error::DomainError, model::Model, question::Question};
pub use debate::{
    CHALLENGE_PARSE_ERROR, ChallengeSet, DebateOutcome, DebateRecord, DebateState,
    DebateTranscript, FinalAnswer, JSON_PARSE_ERROR, OpeningStatement, Phase, Rebuttal, SeatMap,
    Statement,
};
pub use persona::{PersonaModels, Role};
pub use prompt::{Constitution, DebatePromptTemplate};
pub use query::{AnswerEvaluation, DatasetName, Document, QueryContext, SeatId};
pub use validation::{ChallengeParseError, Validated, parse_challenges, validate};
