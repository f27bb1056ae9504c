//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while parsing an event snapshot.
///
/// The Display form is the underlying `serde_json` message, unprefixed,
/// because it is surfaced verbatim in the drift report.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during report file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
