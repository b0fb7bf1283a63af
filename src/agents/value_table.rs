//! State-value table for the learning agent

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::StateKey;

/// Value assumed for states that have never been updated
pub const NEUTRAL_VALUE: f64 = 0.0;

/// Mapping from state key to estimated value.
///
/// Serializes as a plain key/value map so persisted tables stay readable.
/// Keys are kept sorted, which keeps saved files stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueTable {
    values: BTreeMap<StateKey, f64>,
}

impl ValueTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimated value of a state, [`NEUTRAL_VALUE`] if never written
    pub fn get(&self, key: &StateKey) -> f64 {
        self.values.get(key).copied().unwrap_or(NEUTRAL_VALUE)
    }

    /// Set the value for a state
    pub fn set(&mut self, key: StateKey, value: f64) {
        self.values.insert(key, value);
    }

    pub fn contains(&self, key: &StateKey) -> bool {
        self.values.contains_key(key)
    }

    /// Get total number of values stored
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&StateKey, f64)> {
        self.values.iter().map(|(k, &v)| (k, v))
    }

    /// The `k` highest-valued states, best first (ties in key order)
    pub fn top(&self, k: usize) -> Vec<(&StateKey, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        entries.truncate(k);
        entries
    }
}

impl FromIterator<(StateKey, f64)> for ValueTable {
    fn from_iter<I: IntoIterator<Item = (StateKey, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> StateKey {
        StateKey::parse(s).unwrap()
    }

    #[test]
    fn test_unknown_key_is_neutral() {
        let table = ValueTable::new();
        assert_eq!(table.get(&key("x../.../...")), NEUTRAL_VALUE);
        assert!(table.is_empty());
    }

    #[test]
    fn test_set_get() {
        let mut table = ValueTable::new();
        table.set(key("x../.../..."), 0.75);
        assert_eq!(table.get(&key("x../.../...")), 0.75);
        assert!(table.contains(&key("x../.../...")));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_top_orders_by_value() {
        let table: ValueTable = [
            (key("x../.../..."), 0.1),
            (key(".x./.../..."), 0.9),
            (key("..x/.../..."), -0.4),
        ]
        .into_iter()
        .collect();

        let top = table.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0.as_str(), ".x./.../...");
        assert_eq!(top[1].0.as_str(), "x../.../...");
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let mut table = ValueTable::new();
        table.set(key("x../.../..."), 0.5);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"x../.../...":0.5}"#);
    }
}
