//! Seat-keyed mapping that serializes in seat order.

use crate::query::seat::SeatId;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered `seat -> value` mapping.
///
/// Serializes as a JSON object whose keys are `agent_{n}` in ascending seat
/// number, so `agent_10` follows `agent_9` rather than `agent_1`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatMap<T> {
    entries: Vec<(SeatId, T)>,
}

impl<T> SeatMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for a seat, keeping seat order.
    pub fn insert(&mut self, seat: SeatId, value: T) {
        match self.entries.binary_search_by_key(&seat, |(s, _)| *s) {
            Ok(pos) => self.entries[pos].1 = value,
            Err(pos) => self.entries.insert(pos, (seat, value)),
        }
    }

    pub fn get(&self, seat: SeatId) -> Option<&T> {
        self.entries
            .binary_search_by_key(&seat, |(s, _)| *s)
            .ok()
            .map(|pos| &self.entries[pos].1)
    }

    pub fn contains(&self, seat: SeatId) -> bool {
        self.get(seat).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.entries.iter().map(|(s, _)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeatId, &T)> {
        self.entries.iter().map(|(s, v)| (*s, v))
    }
}

impl<T> Default for SeatMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(SeatId, T)> for SeatMap<T> {
    fn from_iter<I: IntoIterator<Item = (SeatId, T)>>(iter: I) -> Self {
        let mut map = SeatMap::new();
        for (seat, value) in iter {
            map.insert(seat, value);
        }
        map
    }
}

impl<T: Serialize> Serialize for SeatMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (seat, value) in &self.entries {
            map.serialize_entry(seat, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_in_numeric_seat_order() {
        let map: SeatMap<u32> = (0..11).rev().map(|i| (SeatId::from_index(i), i as u32)).collect();
        let json = serde_json::to_string(&map).unwrap();
        assert!(json.starts_with(r#"{"agent_1":0,"agent_2":1"#));
        assert!(json.ends_with(r#""agent_10":9,"agent_11":10}"#));
    }

    #[test]
    fn test_insert_replaces_existing_seat() {
        let mut map = SeatMap::new();
        map.insert(SeatId::from_index(0), "a");
        map.insert(SeatId::from_index(0), "b");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get(SeatId::from_index(0)), Some(&"b"));
        assert!(!map.contains(SeatId::from_index(1)));
    }
}
