//! Consolidated tests for the diff module.
//!
//! Covers comparison semantics, ordering, severity derivation, and report
//! rendering.

use super::*;
use crate::parser::EventRecord;
use crate::utils::config::DRIFT_FIELDS;
use serde_json::json;

fn record(value: serde_json::Value) -> EventRecord {
    EventRecord::new(value)
}

// ============================================================================
// COMPONENT TESTS: COMPARATOR
// ============================================================================

mod comparator_tests {
    use super::*;

    #[test]
    fn test_identical_records_yield_no_issues() {
        let v1 = record(json!({"tier": "Gold", "score": 82}));
        let v2 = v1.clone();

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_untracked_fields_are_ignored() {
        let v1 = record(json!({"internalFlag": true, "notes": "a"}));
        let v2 = record(json!({"internalFlag": false, "notes": "b"}));

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_presence_asymmetry() {
        let gold = record(json!({"tier": "Gold"}));
        let empty = record(json!({}));

        let removed = compare_events(&gold, &empty, DRIFT_FIELDS);
        assert_eq!(
            removed,
            vec![FieldDrift::Removed {
                field: "tier".to_string(),
                old: json!("Gold"),
            }]
        );

        let added = compare_events(&empty, &gold, DRIFT_FIELDS);
        assert_eq!(
            added,
            vec![FieldDrift::Added {
                field: "tier".to_string(),
                new: json!("Gold"),
            }]
        );
    }

    #[test]
    fn test_falsy_values_count_as_present() {
        // Keys mapped to 0, "", false, or null are present, so dropping them
        // is a removal and keeping them identical is no issue at all.
        let v1 = record(json!({"score": 0, "promoCode": "", "segment": false, "currency": null}));
        let v2 = record(json!({}));

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        let fields: Vec<&str> = issues.iter().map(|i| i.field()).collect();
        assert_eq!(fields, vec!["segment", "promoCode", "score", "currency"]);
        assert!(issues
            .iter()
            .all(|i| matches!(i, FieldDrift::Removed { .. })));

        let unchanged = compare_events(&v1, &v1.clone(), DRIFT_FIELDS);
        assert!(unchanged.is_empty());
    }

    #[test]
    fn test_strict_equality_treats_type_mismatch_as_drift() {
        let v1 = record(json!({"score": 82}));
        let v2 = record(json!({"score": "82"}));

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        assert_eq!(
            issues,
            vec![FieldDrift::Changed {
                field: "score".to_string(),
                old: json!(82),
                new: json!("82"),
            }]
        );
    }

    #[test]
    fn test_output_order_follows_tracked_list() {
        // Input key order is deliberately reversed; issue order must follow
        // DRIFT_FIELDS, not insertion order.
        let v1 = record(json!({"category": "A", "score": 1, "tier": "Gold"}));
        let v2 = record(json!({"category": "B", "score": 2, "tier": "Silver"}));

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        let fields: Vec<&str> = issues.iter().map(|i| i.field()).collect();
        assert_eq!(fields, vec!["tier", "score", "category"]);
    }

    #[test]
    fn test_non_object_record_has_no_fields() {
        let v1 = record(json!([1, 2, 3]));
        let v2 = record(json!({"tier": "Gold"}));

        let issues = compare_events(&v1, &v2, DRIFT_FIELDS);
        assert_eq!(
            issues,
            vec![FieldDrift::Added {
                field: "tier".to_string(),
                new: json!("Gold"),
            }]
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let v1 = record(json!({"tier": "Gold"}));
        let v2 = record(json!({"tier": "Silver"}));
        let v1_before = v1.clone();
        let v2_before = v2.clone();

        let _ = compare_events(&v1, &v2, DRIFT_FIELDS);
        assert_eq!(v1, v1_before);
        assert_eq!(v2, v2_before);
    }
}

// ============================================================================
// COMPONENT TESTS: ENGINE
// ============================================================================

mod engine_tests {
    use super::*;

    #[test]
    fn test_generate_report_counts_and_classifies() {
        let v1 = record(json!({"tier": "Gold", "score": 82}));
        let v2 = record(json!({"tier": "Platinum", "score": 76}));

        let report = generate_report(&v1, &v2);
        assert_eq!(report.issue_count, 2);
        assert_eq!(report.issues.len(), 2);
        assert_eq!(report.level, DriftLevel::Medium);
    }

    #[test]
    fn test_generate_report_no_drift_is_low() {
        let v1 = record(json!({"tier": "Gold"}));
        let report = generate_report(&v1, &v1.clone());

        assert_eq!(report.issue_count, 0);
        assert_eq!(report.level, DriftLevel::Low);
    }

    #[test]
    fn test_run_check_short_circuits_on_parse_failure() {
        let outcome = run_check("{not json", r#"{"tier": "Gold"}"#);

        match outcome {
            CheckOutcome::Invalid(failures) => {
                assert!(failures.any());
                assert!(failures.v1.is_some());
                assert!(failures.v2.is_none());
            }
            CheckOutcome::Report(_) => panic!("comparison must not run on parse failure"),
        }
    }

    #[test]
    fn test_run_check_reports_both_failing_sides() {
        let outcome = run_check("", "[1, 2");

        match outcome {
            CheckOutcome::Invalid(failures) => {
                assert!(failures.v1.is_some());
                assert!(failures.v2.is_some());
            }
            CheckOutcome::Report(_) => panic!("expected Invalid outcome"),
        }
    }

    #[test]
    fn test_run_check_is_idempotent() {
        let v1 = r#"{"tier": "Gold", "score": 82}"#;
        let v2 = r#"{"tier": "Silver", "score": 82}"#;

        let first = run_check(v1, v2);
        let second = run_check(v1, v2);
        assert_eq!(first, second);
        assert_eq!(render_report(&first), render_report(&second));
    }
}

// ============================================================================
// COMPONENT TESTS: OUTPUT
// ============================================================================

mod output_tests {
    use super::*;

    #[test]
    fn test_render_no_drift() {
        let outcome = run_check(r#"{"tier": "Gold"}"#, r#"{"tier": "Gold"}"#);
        let text = render_report(&outcome);

        assert_eq!(
            text,
            "No drift detected for tracked fields.\n\
             \n\
             Drift Level: Low\n\
             Issue Count: 0\n\
             \n\
             Impact: Low — small or no meaningful changes in tracked fields."
        );
    }

    #[test]
    fn test_render_drift_report_full_text() {
        let outcome = run_check(
            r#"{"tier": "Gold", "score": 82}"#,
            r#"{"tier": "Platinum", "score": "82"}"#,
        );
        let text = render_report(&outcome);

        assert_eq!(
            text,
            "Drift Detected:\n\
             - Value drift in tier: v1=\"Gold\" → v2=\"Platinum\"\n\
             - Value drift in score: v1=\"82\" → v2=\"82\"\n\
             \n\
             Drift Level: Medium\n\
             Issue Count: 2\n\
             \n\
             Impact: Medium — some targeting or promo behavior may shift; review before relying on historical results."
        );
    }

    #[test]
    fn test_render_removed_and_added_phrasing() {
        let removed = FieldDrift::Removed {
            field: "tier".to_string(),
            old: json!("Gold"),
        };
        let added = FieldDrift::Added {
            field: "score".to_string(),
            new: json!(76),
        };
        let report = DriftReport {
            issues: vec![removed, added],
            level: DriftLevel::Medium,
            issue_count: 2,
        };

        let text = render_report(&CheckOutcome::Report(report));
        assert!(text.contains("- Field removed in v2: tier (was \"Gold\")"));
        assert!(text.contains("- Field added in v2: score (now \"76\")"));
    }

    #[test]
    fn test_render_parse_failures_names_each_side() {
        let failures = ParseFailures {
            v1: Some("expected value at line 1 column 1".to_string()),
            v2: Some("EOF while parsing a list at line 1 column 5".to_string()),
        };

        let text = render_report(&CheckOutcome::Invalid(failures));
        assert_eq!(
            text,
            "Error parsing JSON:\n\
             - Event v1: expected value at line 1 column 1\n\
             - Event v2: EOF while parsing a list at line 1 column 5"
        );
    }

    #[test]
    fn test_render_parse_failure_single_side() {
        let failures = ParseFailures {
            v1: None,
            v2: Some("trailing characters at line 2 column 1".to_string()),
        };

        let text = render_report(&CheckOutcome::Invalid(failures));
        assert!(!text.contains("Event v1"));
        assert!(text.contains("- Event v2: trailing characters at line 2 column 1"));
    }

    #[test]
    fn test_high_advisory_selected_at_five_issues() {
        let v1 = record(json!({
            "partnerId": "a", "tier": "b", "promoCode": "c", "score": 1, "category": "d"
        }));
        let v2 = record(json!({
            "partnerId": "x", "tier": "y", "promoCode": "z", "score": 2, "category": "w"
        }));

        let report = generate_report(&v1, &v2);
        assert_eq!(report.level, DriftLevel::High);

        let text = render_report(&CheckOutcome::Report(report));
        assert!(text.contains("Drift Level: High"));
        assert!(text.contains("Impact: High — expect targeting"));
    }
}

// ============================================================================
// SCHEMA SERIALIZATION
// ============================================================================

#[test]
fn test_field_drift_serializes_tagged() {
    let issue = FieldDrift::Changed {
        field: "score".to_string(),
        old: json!(82),
        new: json!(76),
    };

    let value = serde_json::to_value(&issue).unwrap();
    assert_eq!(value["kind"], "changed");
    assert_eq!(value["field"], "score");
    assert_eq!(value["old"], 82);
    assert_eq!(value["new"], 76);

    let back: FieldDrift = serde_json::from_value(value).unwrap();
    assert_eq!(back, issue);
}

#[test]
fn test_drift_level_serializes_lowercase() {
    assert_eq!(serde_json::to_value(DriftLevel::High).unwrap(), json!("high"));
    assert_eq!(DriftLevel::Medium.to_string(), "Medium");
}
