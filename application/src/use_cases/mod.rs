//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod persona_registry;
pub mod run_debate;
pub mod run_experiment;
pub(crate) mod shared;
