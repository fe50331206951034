//! Processing summary document written next to the output

use super::summary::{FacilityDigest, RunSummary};
use crate::core::evaluate::DAYS_PER_MONTH;
use crate::domain::RecordError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Exclusion counters by reason
#[derive(Debug, Clone, Serialize)]
pub struct ExclusionCounts {
    pub no_accreditations: usize,
    pub only_expired: usize,
    pub not_expiring: usize,
}

/// Serializable processing summary
#[derive(Debug, Clone, Serialize)]
pub struct ProcessingReport<'a> {
    pub run_id: Uuid,
    pub processing_date: DateTime<Utc>,
    pub current_date: NaiveDate,
    pub threshold_months: u32,
    pub threshold_date: NaiveDate,
    pub filter_criteria: String,
    pub input_files: &'a [String],
    pub total_records: usize,
    pub total_facilities_loaded: usize,
    pub skipped_records: usize,
    pub total_facilities_included: usize,
    pub excluded: ExclusionCounts,
    pub output_location: Option<&'a str>,
    pub output_checksum: Option<&'a str>,
    pub facilities_summary: &'a [FacilityDigest],
    pub record_errors: Vec<SkippedRecord<'a>>,
}

/// A skipped record as it appears in the report
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRecord<'a> {
    #[serde(flatten)]
    pub error: &'a RecordError,
    pub message: String,
}

impl<'a> ProcessingReport<'a> {
    /// Build the report for a finished run
    pub fn from_summary(summary: &'a RunSummary) -> Self {
        Self {
            run_id: summary.run_id,
            processing_date: summary.processed_at,
            current_date: summary.current_date,
            threshold_months: summary.threshold_months,
            threshold_date: summary.threshold_date,
            filter_criteria: format!(
                "Accreditations expiring between {} and {} ({} months of {} days)",
                summary.current_date,
                summary.threshold_date,
                summary.threshold_months,
                DAYS_PER_MONTH
            ),
            input_files: &summary.input_files,
            total_records: summary.total_records(),
            total_facilities_loaded: summary.loaded,
            skipped_records: summary.skipped(),
            total_facilities_included: summary.included,
            excluded: ExclusionCounts {
                no_accreditations: summary.excluded_no_accreditations,
                only_expired: summary.excluded_only_expired,
                not_expiring: summary.excluded_not_expiring,
            },
            output_location: summary.output_location.as_deref(),
            output_checksum: summary.output_checksum.as_deref(),
            facilities_summary: &summary.facilities,
            record_errors: summary
                .record_errors
                .iter()
                .map(|error| SkippedRecord {
                    error,
                    message: error.kind.to_string(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON bytes
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate::EvaluationContext;
    use crate::domain::{RecordErrorKind, RecordPosition};
    use serde_json::Value;

    #[test]
    fn test_report_shape() {
        let ctx = EvaluationContext::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            6,
            Utc::now(),
        )
        .unwrap();
        let mut summary = RunSummary::new(&ctx);
        summary.input_files = vec!["input/a.json".to_string()];
        summary.loaded = 2;
        summary.included = 1;
        summary.excluded_only_expired = 1;
        summary.facilities = vec![FacilityDigest {
            facility_id: "FAC001".to_string(),
            facility_name: "Test Hospital".to_string(),
            expiring_count: 1,
        }];
        summary.record_errors.push(
            RecordError::new(RecordPosition::Index(2), RecordErrorKind::MissingField("facility_id"))
                .with_source("input/a.json"),
        );
        summary.output_location = Some("filtered/out.jsonl".to_string());

        let bytes = ProcessingReport::from_summary(&summary).to_json_bytes().unwrap();
        let report: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(report["threshold_date"], "2024-06-29");
        assert_eq!(report["total_records"], 3);
        assert_eq!(report["skipped_records"], 1);
        assert_eq!(report["excluded"]["only_expired"], 1);
        assert_eq!(report["facilities_summary"][0]["facility_id"], "FAC001");
        assert_eq!(report["output_location"], "filtered/out.jsonl");
        assert_eq!(report["record_errors"][0]["source"], "input/a.json");
        assert_eq!(
            report["record_errors"][0]["message"],
            "missing required field 'facility_id'"
        );
        assert!(report["filter_criteria"]
            .as_str()
            .unwrap()
            .contains("2024-06-29"));
    }
}
