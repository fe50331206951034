//! Domain error types
//!
//! This module defines the error hierarchy for Sentinel. Run-level failures are
//! [`SentinelError`] values; per-record problems found while loading a batch are
//! [`RecordError`] values that travel alongside a successful load.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Main Sentinel error type
///
/// Every fallible run-level operation returns this error. A run that produces one
/// of these has failed outright; skipped records are reported separately.
#[derive(Debug, Error)]
pub enum SentinelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input payload cannot be read in any supported shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// The output target could not be written
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// Storage adapter errors other than writes (listing, reading)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Reason a single record was skipped during loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RecordErrorKind {
    /// The line is not valid JSON
    InvalidJson(String),

    /// The value is valid JSON but not an object
    NotAnObject,

    /// A required field is absent, null, or empty
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    InvalidField { field: String, message: String },
}

impl fmt::Display for RecordErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson(msg) => write!(f, "invalid JSON: {msg}"),
            Self::NotAnObject => write!(f, "record is not a JSON object"),
            Self::MissingField(field) => write!(f, "missing required field '{field}'"),
            Self::InvalidField { field, message } => {
                write!(f, "invalid field '{field}': {message}")
            }
        }
    }
}

/// Where a record sat in its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RecordPosition {
    /// Zero-based index within a JSON array
    Index(usize),

    /// One-based line number within a JSON-lines payload
    Line(usize),
}

impl fmt::Display for RecordPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "index {i}"),
            Self::Line(n) => write!(f, "line {n}"),
        }
    }
}

/// A record that was skipped while loading a batch
///
/// Record errors never abort a run. They are collected and reported in the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordError {
    /// Position of the record in its payload
    pub position: RecordPosition,

    /// Facility ID, when the record carried a usable one
    pub facility_id: Option<String>,

    /// Input the record came from (file key), filled in by the pipeline
    pub source: Option<String>,

    /// Why the record was skipped
    pub kind: RecordErrorKind,
}

impl RecordError {
    /// Creates a new record error
    pub fn new(position: RecordPosition, kind: RecordErrorKind) -> Self {
        Self {
            position,
            facility_id: None,
            source: None,
            kind,
        }
    }

    /// Sets the facility ID
    pub fn with_facility_id(mut self, facility_id: impl Into<String>) -> Self {
        self.facility_id = Some(facility_id.into());
        self
    }

    /// Sets the input source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "{source}: ")?;
        }
        write!(f, "{}", self.position)?;
        if let Some(id) = &self.facility_id {
            write!(f, " (facility {id})")?;
        }
        write!(f, ": {}", self.kind)
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for SentinelError {
    fn from(err: std::io::Error) -> Self {
        SentinelError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for SentinelError {
    fn from(err: serde_json::Error) -> Self {
        SentinelError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for SentinelError {
    fn from(err: toml::de::Error) -> Self {
        SentinelError::Configuration(format!("TOML parse error: {err}"))
    }
}
