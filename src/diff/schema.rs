//! Schema definitions for drift reports.
//!
//! Defines the structures that represent differences between two event
//! snapshots.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single field-level drift finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDrift {
    /// Field present in v1 but missing in v2
    Removed {
        /// Tracked field name
        field: String,

        /// Value the field had in v1
        old: Value,
    },

    /// Field missing in v1 but present in v2
    Added {
        /// Tracked field name
        field: String,

        /// Value the field has in v2
        new: Value,
    },

    /// Field present in both sides with strictly unequal values
    Changed {
        /// Tracked field name
        field: String,

        /// Value in v1
        old: Value,

        /// Value in v2
        new: Value,
    },
}

impl FieldDrift {
    /// Name of the tracked field this finding refers to
    pub fn field(&self) -> &str {
        match self {
            FieldDrift::Removed { field, .. }
            | FieldDrift::Added { field, .. }
            | FieldDrift::Changed { field, .. } => field,
        }
    }
}

/// Coarse severity of detected drift, derived solely from the issue count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriftLevel {
    /// No meaningful change (0 or 1 issues)
    Low,

    /// Some behavior may shift (2 to 4 issues)
    Medium,

    /// Downstream behavior expected to differ (5 or more issues)
    High,
}

impl fmt::Display for DriftLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DriftLevel::Low => "Low",
            DriftLevel::Medium => "Medium",
            DriftLevel::High => "High",
        };
        f.write_str(label)
    }
}

/// Complete drift report for one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Findings in tracked-field order
    pub issues: Vec<FieldDrift>,

    /// Severity derived from the issue count
    pub level: DriftLevel,

    /// Number of findings
    pub issue_count: usize,
}

/// Per-side parse failure messages.
///
/// At least one side is set whenever this appears in a `CheckOutcome`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseFailures {
    /// Error message for the v1 snapshot, if it failed to parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<String>,

    /// Error message for the v2 snapshot, if it failed to parse
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2: Option<String>,
}

impl ParseFailures {
    /// Whether either side failed
    pub fn any(&self) -> bool {
        self.v1.is_some() || self.v2.is_some()
    }
}

/// Outcome of one check invocation.
///
/// Parse failure is carried as data rather than an error so the reporter can
/// present it; the comparison never runs unless both sides parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Both snapshots parsed and drift was computed
    Report(DriftReport),

    /// One or both snapshots failed to parse
    Invalid(ParseFailures),
}
