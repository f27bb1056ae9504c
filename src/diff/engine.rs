//! Core drift engine implementation.
//! Generates complete drift reports by comparing two event snapshots.

use log::debug;

use crate::parser::{parse_event, EventRecord};
use crate::utils::config::DRIFT_FIELDS;

use super::schema::{CheckOutcome, DriftReport, FieldDrift, ParseFailures};
use super::severity::classify;

/// Compare two event snapshots over an ordered list of tracked fields.
///
/// # Arguments
/// * `v1` - The earlier snapshot
/// * `v2` - The later snapshot
/// * `fields` - Tracked field names; output order follows this order
///
/// # Returns
/// One finding per tracked field whose presence or value differs. Presence
/// is own-key membership, so explicit `0`, `""`, `false`, and `null` values
/// count as present. Values compare by strict equality: `82` and `"82"` are
/// different. Fields outside the tracked list are ignored entirely.
pub fn compare_events(v1: &EventRecord, v2: &EventRecord, fields: &[&str]) -> Vec<FieldDrift> {
    let mut issues = Vec::new();

    for &field in fields {
        match (v1.field(field), v2.field(field)) {
            (Some(old), None) => issues.push(FieldDrift::Removed {
                field: field.to_string(),
                old: old.clone(),
            }),
            (None, Some(new)) => issues.push(FieldDrift::Added {
                field: field.to_string(),
                new: new.clone(),
            }),
            (Some(old), Some(new)) => {
                if old != new {
                    issues.push(FieldDrift::Changed {
                        field: field.to_string(),
                        old: old.clone(),
                        new: new.clone(),
                    });
                }
            }
            (None, None) => {}
        }
    }

    issues
}

/// Generate a complete drift report comparing two parsed snapshots
///
/// # Arguments
/// * `v1` - The earlier snapshot
/// * `v2` - The later snapshot
///
/// # Returns
/// DriftReport with findings in tracked-field order and the derived level
pub fn generate_report(v1: &EventRecord, v2: &EventRecord) -> DriftReport {
    // Step 1: Compare over the fixed tracked-field list
    let issues = compare_events(v1, v2, DRIFT_FIELDS);

    // Step 2: Derive severity from the issue count
    let issue_count = issues.len();
    let level = classify(issue_count);

    debug!("drift level {} from {} issue(s)", level, issue_count);

    DriftReport {
        issues,
        level,
        issue_count,
    }
}

/// Run one full check: parse both raw snapshots, then compare.
///
/// This is the single logical operation the crate exposes. A parse failure
/// on either side short-circuits the comparison and is carried as data, so
/// the caller (or the reporter) decides how to present it.
pub fn run_check(text1: &str, text2: &str) -> CheckOutcome {
    let parsed1 = parse_event(text1);
    let parsed2 = parse_event(text2);

    match (parsed1, parsed2) {
        (Ok(v1), Ok(v2)) => CheckOutcome::Report(generate_report(&v1, &v2)),
        (r1, r2) => CheckOutcome::Invalid(ParseFailures {
            v1: r1.err().map(|e| e.to_string()),
            v2: r2.err().map(|e| e.to_string()),
        }),
    }
}
