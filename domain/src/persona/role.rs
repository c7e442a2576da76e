use serde::{Deserialize, Serialize};
use std::fmt;

/// Debate role (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Argues one seat from one document (Thesis and Rebuttal)
    Proponent,
    /// The Devil's Advocate; sees every thesis and every document
    Challenger,
    /// The Aggregator-Judge; reads the whole transcript once
    Judge,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Proponent, Role::Challenger, Role::Judge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Proponent => "proponent",
            Role::Challenger => "challenger",
            Role::Judge => "judge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Proponent => "Proponent Agent",
            Role::Challenger => "Devil's Advocate",
            Role::Judge => "Aggregator-Judge",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
