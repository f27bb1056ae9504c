//! Terminal output rendering for drift reports.
//!
//! Produces the human-readable report text: fixed kind-specific phrasing per
//! finding, the severity and issue-count lines, and a severity-selected
//! advisory sentence.

use serde_json::Value;

use super::schema::{CheckOutcome, DriftLevel, DriftReport, FieldDrift, ParseFailures};

/// Advisory shown when drift level is High
const IMPACT_HIGH: &str = "Impact: High — expect targeting, promo eligibility, or scoring to behave differently between these versions.";

/// Advisory shown when drift level is Medium
const IMPACT_MEDIUM: &str = "Impact: Medium — some targeting or promo behavior may shift; review before relying on historical results.";

/// Advisory shown when drift level is Low
const IMPACT_LOW: &str = "Impact: Low — small or no meaningful changes in tracked fields.";

/// Render a check outcome as the final report text.
///
/// Total over both arms: parse failures render as an error report, anything
/// else as the drift summary. Never fails.
pub fn render_report(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Report(report) => render_drift_report(report),
        CheckOutcome::Invalid(failures) => render_parse_failures(failures),
    }
}

fn render_drift_report(report: &DriftReport) -> String {
    let mut lines = Vec::new();

    if report.issues.is_empty() {
        lines.push("No drift detected for tracked fields.".to_string());
    } else {
        lines.push("Drift Detected:".to_string());
        for issue in &report.issues {
            lines.push(format!("- {}", render_issue(issue)));
        }
    }

    lines.push(String::new());
    lines.push(format!("Drift Level: {}", report.level));
    lines.push(format!("Issue Count: {}", report.issue_count));
    lines.push(String::new());
    lines.push(advisory(report.level).to_string());

    lines.join("\n")
}

/// Render the failure report, naming each side that failed to parse
fn render_parse_failures(failures: &ParseFailures) -> String {
    let mut lines = vec!["Error parsing JSON:".to_string()];

    if let Some(msg) = &failures.v1 {
        lines.push(format!("- Event v1: {}", msg));
    }
    if let Some(msg) = &failures.v2 {
        lines.push(format!("- Event v2: {}", msg));
    }

    lines.join("\n")
}

/// One human-readable sentence per finding, phrased by kind
fn render_issue(issue: &FieldDrift) -> String {
    match issue {
        FieldDrift::Removed { field, old } => {
            format!("Field removed in v2: {} (was \"{}\")", field, display_value(old))
        }
        FieldDrift::Added { field, new } => {
            format!("Field added in v2: {} (now \"{}\")", field, display_value(new))
        }
        FieldDrift::Changed { field, old, new } => format!(
            "Value drift in {}: v1=\"{}\" → v2=\"{}\"",
            field,
            display_value(old),
            display_value(new)
        ),
    }
}

fn advisory(level: DriftLevel) -> &'static str {
    match level {
        DriftLevel::High => IMPACT_HIGH,
        DriftLevel::Medium => IMPACT_MEDIUM,
        DriftLevel::Low => IMPACT_LOW,
    }
}

/// Render a field value for report text.
///
/// Strings render bare (the surrounding template supplies the quotes);
/// everything else uses its JSON text.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
