//! Small informational command implementations.

use super::scenarios::SCENARIOS;
use crate::utils::config::{DRIFT_FIELDS, REPORT_VERSION};

/// Display the tracked drift fields
///
/// **Public** - internal command implementation
pub fn display_fields() {
    println!("Tracked drift fields ({}):", DRIFT_FIELDS.len());
    for field in DRIFT_FIELDS {
        println!("  {}", field);
    }
    println!();
    println!("Fields outside this list are ignored, even when present and different.");
}

/// Display the built-in sample scenarios
///
/// **Public** - internal command implementation
pub fn display_scenarios() {
    println!("Built-in scenarios:");
    for scenario in SCENARIOS {
        println!("  {:<12} {}", scenario.name, scenario.label);
    }
    println!();
    println!("Run one with `promo-drift scenario --name <NAME>`");
}

/// Display version information
///
/// **Public** - internal command implementation
pub fn display_version() {
    println!("Promo Drift v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", REPORT_VERSION);
    println!();
    println!("Field-level drift detection for loyalty promotion events.");
}
