//! Application-level configuration.
//!
//! - [`DebateParams`]: scheduling of persona calls and debates

pub mod debate_params;

pub use debate_params::DebateParams;
