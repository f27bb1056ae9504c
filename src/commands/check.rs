//! Check command implementation.
//! Orchestrates one drift check and presents the result.

use super::models::CheckArgs;
use crate::diff::{render_report, run_check, CheckOutcome};
use crate::output::json::write_report;
use anyhow::{Context, Result};
use colored::*;
use log::debug;
use std::fs;
use std::path::Path;

/// Execute the check command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Check command arguments
///
/// # Returns
/// Ok if both snapshots parsed and the report was presented
///
/// # Errors
/// * Snapshot file read errors
/// * Parse failures (the failure report is printed first)
/// * Report file write errors
pub fn execute_check(args: CheckArgs) -> Result<()> {
    // Step 1: Load raw snapshots
    let text1 = fs::read_to_string(&args.v1)
        .with_context(|| format!("Failed to read v1 snapshot {}", args.v1.display()))?;
    let text2 = fs::read_to_string(&args.v2)
        .with_context(|| format!("Failed to read v2 snapshot {}", args.v2.display()))?;

    run_texts(&text1, &text2, args.output.as_deref())
}

/// Run a check over two raw snapshot texts and present the outcome.
///
/// Shared by the `check` and `scenario` commands.
pub fn run_texts(text1: &str, text2: &str, output: Option<&Path>) -> Result<()> {
    debug!(
        "checking snapshots ({} vs {} bytes)",
        text1.len(),
        text2.len()
    );

    // Step 2: Run the pipeline
    let outcome = run_check(text1, text2);

    // Step 3: Print the rendered report
    println!("{}", render_report(&outcome));

    match &outcome {
        CheckOutcome::Report(report) => {
            // Step 4: Write JSON envelope if requested
            if let Some(path) = output {
                write_report(report, path).context("Failed to write drift report JSON")?;
                println!(
                    "Report written to {}",
                    path.display().to_string().cyan()
                );
            }

            Ok(())
        }

        // Step 5: Parse failures exit nonzero; the failure report above is
        // the user-facing detail
        CheckOutcome::Invalid(_) => Err(anyhow::anyhow!("event snapshots failed to parse")),
    }
}
