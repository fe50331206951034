//! Domain models and types for Sentinel.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`FacilityId`])
//! - **Domain models** ([`FacilityRecord`], [`AccreditationRecord`], [`ProcessingMetadata`])
//! - **Error types** ([`SentinelError`], [`RecordError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! Run-level operations return [`Result<T, SentinelError>`]. Records that cannot be
//! loaded are described by [`RecordError`] and never abort a run:
//!
//! ```rust
//! use sentinel::domain::{RecordError, RecordErrorKind, RecordPosition};
//!
//! let skipped = RecordError::new(RecordPosition::Line(4), RecordErrorKind::MissingField("facility_id"));
//! assert_eq!(skipped.to_string(), "line 4: missing required field 'facility_id'");
//! ```

pub mod accreditation;
pub mod errors;
pub mod facility;
pub mod ids;
pub mod metadata;
pub mod result;

// Re-export commonly used types for convenience
pub use accreditation::{AccreditationRecord, AccreditationStatus};
pub use errors::{RecordError, RecordErrorKind, RecordPosition, SentinelError};
pub use facility::{FacilityRecord, Lab, Location};
pub use ids::FacilityId;
pub use metadata::{EnrichedFacility, ExpiringAccreditation, ProcessingMetadata, METADATA_FIELD};
pub use result::Result;
