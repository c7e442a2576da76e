//! Seat identifiers.
//!
//! A seat is the per-document slot in a debate. Seat numbering is purely
//! positional: the document at index `i` (0-based) sits in seat `i + 1`,
//! rendered as `agent_{i+1}`.

use serde::{Serialize, Serializer};
use std::fmt;

/// 1-indexed debate seat (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(usize);

impl SeatId {
    /// Seat for the document at the given 0-based position.
    pub fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// 1-based seat number.
    pub fn number(&self) -> usize {
        self.0
    }

    /// 0-based position of the seat's document.
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// Agent name used as the transcript key (`agent_3`).
    pub fn agent_name(&self) -> String {
        format!("agent_{}", self.0)
    }

    /// Key the Challenger uses to address this seat (`agent_3_challenge`).
    pub fn challenge_key(&self) -> String {
        format!("agent_{}_challenge", self.0)
    }

    /// Parse an agent name of the form `agent_{n}` with `n >= 1`.
    pub fn parse_agent_name(name: &str) -> Option<Self> {
        let number: usize = name.strip_prefix("agent_")?.parse().ok()?;
        (number >= 1).then_some(Self(number))
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent_{}", self.0)
    }
}

impl Serialize for SeatId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_is_one_indexed() {
        let seat = SeatId::from_index(0);
        assert_eq!(seat.number(), 1);
        assert_eq!(seat.index(), 0);
        assert_eq!(seat.agent_name(), "agent_1");
        assert_eq!(seat.challenge_key(), "agent_1_challenge");
    }

    #[test]
    fn test_parse_agent_name() {
        assert_eq!(SeatId::parse_agent_name("agent_12"), Some(SeatId::from_index(11)));
        assert_eq!(SeatId::parse_agent_name("agent_0"), None);
        assert_eq!(SeatId::parse_agent_name("agent_x"), None);
        assert_eq!(SeatId::parse_agent_name("agent_1_challenge"), None);
    }

    #[test]
    fn test_seat_ordering_is_numeric() {
        let mut seats = vec![SeatId::from_index(9), SeatId::from_index(1)];
        seats.sort();
        assert_eq!(seats[0].agent_name(), "agent_2");
        assert_eq!(seats[1].agent_name(), "agent_10");
    }
}
