//! Event snapshot parsing and schema definitions.
//!
//! This module handles:
//! - Parsing raw JSON text into an `EventRecord`
//! - Field lookup semantics (own-key presence, not value truthiness)

pub mod event;

// Re-export main types
pub use event::EventRecord;

use crate::utils::error::ParseError;
use log::debug;

/// Parse a raw event snapshot.
///
/// # Arguments
/// * `text` - Raw text, expected to be JSON-encoded
///
/// # Returns
/// The decoded record. Any syntactically valid JSON is accepted, including
/// non-object values; those simply compare as having no fields at all.
///
/// # Errors
/// * `ParseError::Json` - Malformed JSON. The message is the parser's own,
///   passed through verbatim because it is shown to the end user.
pub fn parse_event(text: &str) -> Result<EventRecord, ParseError> {
    let value = serde_json::from_str(text)?;
    debug!("parsed event snapshot ({} bytes)", text.len());
    Ok(EventRecord::new(value))
}
