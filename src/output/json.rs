//! JSON report writer.
//!
//! Writes drift reports to disk inside a versioned envelope with proper
//! formatting.

use crate::diff::DriftReport;
use crate::utils::config::REPORT_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// On-disk report envelope.
///
/// The timestamp lives here rather than in `DriftReport` so that repeated
/// checks over the same inputs stay byte-identical in memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportFile {
    /// Schema version for compatibility checking
    pub report_version: String,

    /// Timestamp when the report was written
    pub generated_at: String,

    /// The drift report itself
    pub report: DriftReport,
}

/// Write a drift report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `report` - Report data to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &DriftReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing drift report to: {}", output_path.display());

    // Validate path
    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let envelope = ReportFile {
        report_version: REPORT_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        report: report.clone(),
    };

    // Open file for writing
    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    // Serialize to JSON with pretty printing
    serde_json::to_writer_pretty(writer, &envelope).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a report envelope from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Arguments
/// * `input_path` - Path to JSON file
///
/// # Returns
/// Parsed ReportFile
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportFile, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading drift report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let envelope: ReportFile =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} issue(s)",
        envelope.report_version, envelope.report.issue_count
    );

    Ok(envelope)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    // Check if we're trying to overwrite a directory
    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
