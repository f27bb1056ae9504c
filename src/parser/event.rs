//! Event record schema.
//!
//! An event snapshot is arbitrary decoded JSON; only top-level fields in the
//! tracked list matter downstream.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A parsed event snapshot.
///
/// Wraps the decoded JSON value so that field presence is tested on the key
/// itself, never on value truthiness: a field explicitly set to `0`, `""`,
/// `false`, or `null` counts as present, while a missing key is absent.
/// Non-object values are accepted and report every field as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(Value);

impl EventRecord {
    /// Wrap an already-decoded JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Look up a top-level field by key.
    ///
    /// Returns `Some` for any present key, including keys mapped to `null`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(name))
    }

    /// Whether the record carries the given top-level key
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

impl From<Value> for EventRecord {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
