//! Processing metadata attached to facilities that pass the expiry filter

use super::accreditation::AccreditationRecord;
use super::facility::FacilityRecord;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output field that carries [`ProcessingMetadata`]
pub const METADATA_FIELD: &str = "_processing_metadata";

/// An accreditation found to be expiring soon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpiringAccreditation {
    pub accreditation_body: String,
    pub accreditation_id: String,
    pub valid_until: NaiveDate,
}

impl ExpiringAccreditation {
    /// Captures an accreditation together with its parsed expiry date
    pub fn from_record(record: &AccreditationRecord, valid_until: NaiveDate) -> Self {
        Self {
            accreditation_body: record.accreditation_body.clone(),
            accreditation_id: record.accreditation_id.clone(),
            valid_until,
        }
    }
}

/// Metadata computed once per evaluation for an included facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingMetadata {
    /// Instant the evaluation ran
    pub processing_timestamp: DateTime<Utc>,

    /// Accreditations classified as expiring soon, in upstream order
    pub expiring_accreditations: Vec<ExpiringAccreditation>,

    /// Length of the facility's original accreditation list
    pub total_accreditation_count: usize,
}

/// A facility that passed the filter, paired with its metadata
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedFacility {
    pub facility: FacilityRecord,
    pub metadata: ProcessingMetadata,
}

impl EnrichedFacility {
    /// Creates a new enriched facility
    pub fn new(facility: FacilityRecord, metadata: ProcessingMetadata) -> Self {
        Self { facility, metadata }
    }

    /// Number of expiring accreditations
    pub fn expiring_count(&self) -> usize {
        self.metadata.expiring_accreditations.len()
    }

    /// The facility's original object with [`METADATA_FIELD`] added
    ///
    /// An upstream field that already uses the metadata name is replaced.
    pub fn to_output_object(&self) -> serde_json::Result<Map<String, Value>> {
        let mut object = self.facility.source().clone();
        object.insert(METADATA_FIELD.to_string(), serde_json::to_value(&self.metadata)?);
        Ok(object)
    }
}
