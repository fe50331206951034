//! Run summary and reporting
//!
//! This module defines structures for tracking and reporting the result of a run.

use crate::core::evaluate::{BatchEvaluation, EvaluationContext};
use crate::domain::{EnrichedFacility, RecordError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

/// Per-facility line of the run summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacilityDigest {
    pub facility_id: String,
    pub facility_name: String,
    pub expiring_count: usize,
}

impl From<&EnrichedFacility> for FacilityDigest {
    fn from(enriched: &EnrichedFacility) -> Self {
        Self {
            facility_id: enriched.facility.id.to_string(),
            facility_name: enriched.facility.name.clone(),
            expiring_count: enriched.expiring_count(),
        }
    }
}

/// Summary of a processing run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Unique ID of this run
    pub run_id: Uuid,

    /// Instant the evaluation ran
    pub processed_at: DateTime<Utc>,

    /// Date the expiry window was anchored on
    pub current_date: NaiveDate,

    /// Last date counted as expiring soon
    pub threshold_date: NaiveDate,

    /// Look-ahead in 30-day months
    pub threshold_months: u32,

    /// Input payloads read, in order
    pub input_files: Vec<String>,

    /// Facilities loaded successfully
    pub loaded: usize,

    /// Facilities included in the output
    pub included: usize,

    /// Facilities excluded because they have no accreditations
    pub excluded_no_accreditations: usize,

    /// Facilities excluded because every dated accreditation already expired
    pub excluded_only_expired: usize,

    /// Facilities excluded because nothing expires inside the window
    pub excluded_not_expiring: usize,

    /// Records skipped while loading
    pub record_errors: Vec<RecordError>,

    /// Included facilities, in output order
    pub facilities: Vec<FacilityDigest>,

    /// Where the output was written (None for dry runs)
    pub output_location: Option<String>,

    /// Where the processing summary was written, if it was
    pub summary_location: Option<String>,

    /// SHA-256 of the output bytes
    pub output_checksum: Option<String>,

    /// Whether writes were skipped
    pub dry_run: bool,

    /// Duration of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Create an empty summary for a run with the given window
    pub fn new(ctx: &EvaluationContext) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            processed_at: ctx.evaluated_at,
            current_date: ctx.current_date,
            threshold_date: ctx.threshold_date(),
            threshold_months: ctx.threshold_months,
            input_files: Vec::new(),
            loaded: 0,
            included: 0,
            excluded_no_accreditations: 0,
            excluded_only_expired: 0,
            excluded_not_expiring: 0,
            record_errors: Vec::new(),
            facilities: Vec::new(),
            output_location: None,
            summary_location: None,
            output_checksum: None,
            dry_run: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record the evaluation counters and included facilities
    pub fn record_evaluation(&mut self, evaluation: &BatchEvaluation) {
        self.included = evaluation.included.len();
        self.excluded_no_accreditations = evaluation.excluded_no_accreditations;
        self.excluded_only_expired = evaluation.excluded_only_expired;
        self.excluded_not_expiring = evaluation.excluded_not_expiring;
        self.facilities = evaluation.included.iter().map(FacilityDigest::from).collect();
    }

    /// Number of skipped records
    pub fn skipped(&self) -> usize {
        self.record_errors.len()
    }

    /// Total records seen across all inputs
    pub fn total_records(&self) -> usize {
        self.loaded + self.skipped()
    }

    /// Total excluded facilities
    pub fn excluded(&self) -> usize {
        self.excluded_no_accreditations + self.excluded_only_expired + self.excluded_not_expiring
    }

    /// Check if every record was loaded
    pub fn is_clean(&self) -> bool {
        self.record_errors.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            inputs = self.input_files.len(),
            total_records = self.total_records(),
            loaded = self.loaded,
            skipped = self.skipped(),
            included = self.included,
            excluded = self.excluded(),
            excluded_only_expired = self.excluded_only_expired,
            threshold_date = %self.threshold_date,
            dry_run = self.dry_run,
            duration_ms = self.duration.as_millis() as u64,
            "Processing run completed"
        );

        if !self.record_errors.is_empty() {
            tracing::warn!(
                skipped = self.record_errors.len(),
                "Run completed with skipped records"
            );
        }
    }
}
