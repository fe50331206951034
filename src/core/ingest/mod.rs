//! Record loading
//!
//! Turns a raw payload into an ordered sequence of [`FacilityRecord`]s. Two shapes are
//! accepted:
//!
//! - **JSON array**: a single array of facility objects
//! - **JSON lines**: one facility object per line, blank lines ignored
//!
//! Records that fail validation are reported in [`LoadOutcome::errors`] and left out of
//! the sequence. Only a payload that cannot be read in either shape fails the load.

mod payload;

use crate::domain::facility::peek_facility_id;
use crate::domain::{FacilityRecord, RecordError, RecordErrorKind, Result, SentinelError};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Payload shape hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadFormat {
    /// Detect from content: arrays first, then JSON lines
    #[default]
    Auto,
    /// A single JSON array of objects
    JsonArray,
    /// Newline-delimited JSON objects
    JsonLines,
}

impl FromStr for PayloadFormat {
    type Err = SentinelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "json_array" | "json" | "array" => Ok(Self::JsonArray),
            "json_lines" | "jsonl" | "ndjson" | "lines" => Ok(Self::JsonLines),
            _ => Err(SentinelError::Configuration(format!(
                "Invalid payload format: {s}. Expected 'auto', 'json_array' or 'json_lines'"
            ))),
        }
    }
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::JsonArray => "json_array",
            Self::JsonLines => "json_lines",
        };
        f.write_str(name)
    }
}

/// Result of loading one payload
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Valid facilities in payload order
    pub facilities: Vec<FacilityRecord>,

    /// Records that were skipped
    pub errors: Vec<RecordError>,

    /// Shape the payload was read as (`Auto` only for an empty payload)
    pub format: PayloadFormat,
}

impl LoadOutcome {
    /// Total number of records seen, valid or not
    pub fn records_seen(&self) -> usize {
        self.facilities.len() + self.errors.len()
    }

    /// Appends another outcome, keeping order
    pub fn merge(&mut self, other: LoadOutcome) {
        self.facilities.extend(other.facilities);
        self.errors.extend(other.errors);
        if self.format == PayloadFormat::Auto {
            self.format = other.format;
        }
    }
}

/// Loads facilities from a raw payload
///
/// # Errors
///
/// Returns [`SentinelError::MalformedPayload`] when the payload is not UTF-8 or cannot
/// be read in the requested (or any detected) shape.
///
/// # Examples
///
/// ```
/// use sentinel::core::ingest::{load_facilities, PayloadFormat};
///
/// let payload = br#"{"facility_id": "FAC001", "facility_name": "Test Hospital"}
/// {"facility_name": "Missing Id"}"#;
///
/// let outcome = load_facilities(payload, PayloadFormat::Auto).unwrap();
/// assert_eq!(outcome.facilities.len(), 1);
/// assert_eq!(outcome.errors.len(), 1);
/// ```
pub fn load_facilities(payload: &[u8], format: PayloadFormat) -> Result<LoadOutcome> {
    let text = std::str::from_utf8(payload).map_err(|e| {
        SentinelError::MalformedPayload(format!("payload is not valid UTF-8: {e}"))
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    if text.trim().is_empty() {
        tracing::debug!("Empty payload, nothing to load");
        return Ok(LoadOutcome::default());
    }

    let (records, detected) = match format {
        PayloadFormat::JsonArray => (payload::parse_array(text)?, PayloadFormat::JsonArray),
        PayloadFormat::JsonLines => (payload::parse_lines(text)?, PayloadFormat::JsonLines),
        PayloadFormat::Auto if text.trim_start().starts_with('[') => {
            match payload::parse_array(text) {
                Ok(records) => (records, PayloadFormat::JsonArray),
                Err(e) => {
                    tracing::info!(error = %e, "JSON array parsing failed, trying JSON lines");
                    (payload::parse_lines(text)?, PayloadFormat::JsonLines)
                }
            }
        }
        PayloadFormat::Auto => (payload::parse_lines(text)?, PayloadFormat::JsonLines),
    };

    let mut outcome = LoadOutcome {
        facilities: Vec::with_capacity(records.len()),
        errors: Vec::new(),
        format: detected,
    };
    let mut seen_ids = HashSet::new();

    for record in records {
        let object = match record.parsed {
            Ok(Value::Object(object)) => object,
            Ok(_) => {
                outcome
                    .errors
                    .push(RecordError::new(record.position, RecordErrorKind::NotAnObject));
                continue;
            }
            Err(msg) => {
                outcome.errors.push(RecordError::new(
                    record.position,
                    RecordErrorKind::InvalidJson(msg),
                ));
                continue;
            }
        };

        let peeked_id = peek_facility_id(&object);
        match FacilityRecord::from_object(object) {
            Ok(facility) => {
                if !seen_ids.insert(facility.id.clone()) {
                    tracing::warn!(
                        facility_id = %facility.id,
                        position = %record.position,
                        "Duplicate facility_id in batch"
                    );
                }
                outcome.facilities.push(facility);
            }
            Err(kind) => {
                let mut error = RecordError::new(record.position, kind);
                if let Some(id) = peeked_id {
                    error = error.with_facility_id(id);
                }
                outcome.errors.push(error);
            }
        }
    }

    for error in &outcome.errors {
        crate::log_record_skipped!(error);
    }

    tracing::info!(
        format = %outcome.format,
        facilities = outcome.facilities.len(),
        skipped = outcome.errors.len(),
        "Loaded facility payload"
    );

    Ok(outcome)
}
