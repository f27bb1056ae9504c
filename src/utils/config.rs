//! Configuration and constants for the CLI.

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

// Fields examined for drift, in report order. The order here determines the
// order of issues in every report, independent of key order in the input
// snapshots.
pub const DRIFT_FIELDS: &[&str] = &[
    "partnerId",
    "tier",
    "segment",
    "promoCode",
    "campaignId",
    "score",
    "spend",
    "currency",
    "category",
];
