//! Expiration evaluation
//!
//! Decides, per facility, whether any accreditation expires within the configured
//! window and builds the [`ProcessingMetadata`] for facilities that do.
//!
//! Facilities whose accreditations have all already expired are excluded. They are
//! counted separately ([`ExclusionReason::OnlyExpired`]) so the run summary shows how
//! many lapsed facilities the filter does not surface.

mod window;

pub use window::{EvaluationContext, DAYS_PER_MONTH, DEFAULT_THRESHOLD_MONTHS};

use crate::domain::{
    AccreditationStatus, EnrichedFacility, ExpiringAccreditation, FacilityRecord,
    ProcessingMetadata,
};

/// Why a facility was left out of the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// The facility has no accreditations
    NoAccreditations,
    /// At least one accreditation has expired and none expire soon
    OnlyExpired,
    /// Every accreditation is valid beyond the window or undated
    NoneExpiringSoon,
}

/// Outcome of evaluating one facility
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Include(EnrichedFacility),
    Exclude(ExclusionReason),
}

/// Evaluates a single facility
///
/// The facility is borrowed and never modified. An included facility is cloned into
/// the returned [`EnrichedFacility`].
pub fn evaluate_facility(facility: &FacilityRecord, ctx: &EvaluationContext) -> Evaluation {
    if facility.accreditations.is_empty() {
        tracing::debug!(facility_id = %facility.id, "Facility has no accreditations, skipping");
        return Evaluation::Exclude(ExclusionReason::NoAccreditations);
    }

    let mut expiring = Vec::new();
    let mut expired = 0usize;

    for accreditation in &facility.accreditations {
        match ctx.classify(accreditation) {
            AccreditationStatus::ExpiringSoon(date) => {
                expiring.push(ExpiringAccreditation::from_record(accreditation, date));
            }
            AccreditationStatus::Expired(_) => expired += 1,
            AccreditationStatus::Valid(_) => {}
            AccreditationStatus::Undated => {
                tracing::debug!(
                    facility_id = %facility.id,
                    accreditation_body = %accreditation.accreditation_body,
                    valid_until = ?accreditation.valid_until,
                    "Unparseable valid_until, treating accreditation as not expiring"
                );
            }
        }
    }

    if expiring.is_empty() {
        let reason = if expired > 0 {
            ExclusionReason::OnlyExpired
        } else {
            ExclusionReason::NoneExpiringSoon
        };
        return Evaluation::Exclude(reason);
    }

    tracing::info!(
        facility_id = %facility.id,
        facility_name = %facility.name,
        expiring = expiring.len(),
        "Facility has expiring accreditation(s)"
    );

    let metadata = ProcessingMetadata {
        processing_timestamp: ctx.evaluated_at,
        expiring_accreditations: expiring,
        total_accreditation_count: facility.accreditation_count(),
    };
    Evaluation::Include(EnrichedFacility::new(facility.clone(), metadata))
}

/// Evaluation of a whole batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchEvaluation {
    /// Included facilities in input order
    pub included: Vec<EnrichedFacility>,
    /// Facilities without accreditations
    pub excluded_no_accreditations: usize,
    /// Facilities with only expired accreditations
    pub excluded_only_expired: usize,
    /// Facilities with nothing expiring in the window
    pub excluded_not_expiring: usize,
}

impl BatchEvaluation {
    /// Total number of excluded facilities
    pub fn excluded(&self) -> usize {
        self.excluded_no_accreditations + self.excluded_only_expired + self.excluded_not_expiring
    }

    fn record_exclusion(&mut self, reason: ExclusionReason) {
        match reason {
            ExclusionReason::NoAccreditations => self.excluded_no_accreditations += 1,
            ExclusionReason::OnlyExpired => self.excluded_only_expired += 1,
            ExclusionReason::NoneExpiringSoon => self.excluded_not_expiring += 1,
        }
    }
}

/// Evaluates every facility, keeping included ones in input order
///
/// # Examples
///
/// ```
/// use sentinel::core::evaluate::{evaluate_batch, EvaluationContext};
/// use sentinel::domain::FacilityRecord;
/// use chrono::{NaiveDate, Utc};
/// use serde_json::json;
///
/// let facility = FacilityRecord::from_value(json!({
///     "facility_id": "FAC001",
///     "facility_name": "Test Hospital",
///     "accreditations": [{"accreditation_body": "Joint Commission", "valid_until": "2024-03-15"}]
/// })).unwrap();
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let ctx = EvaluationContext::new(today, 6, Utc::now()).unwrap();
/// let result = evaluate_batch(&[facility], &ctx);
/// assert_eq!(result.included.len(), 1);
/// ```
pub fn evaluate_batch(facilities: &[FacilityRecord], ctx: &EvaluationContext) -> BatchEvaluation {
    let mut result = BatchEvaluation::default();

    for facility in facilities {
        match evaluate_facility(facility, ctx) {
            Evaluation::Include(enriched) => result.included.push(enriched),
            Evaluation::Exclude(reason) => result.record_exclusion(reason),
        }
    }

    if result.excluded_only_expired > 0 {
        tracing::warn!(
            count = result.excluded_only_expired,
            "Facilities with only expired accreditations are not included in the output"
        );
    }

    tracing::info!(
        included = result.included.len(),
        total = facilities.len(),
        threshold_date = %ctx.threshold_date(),
        "Filtered facilities with expiring accreditations"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::{json, Value};

    fn ctx() -> EvaluationContext {
        EvaluationContext::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            6,
            Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        )
        .unwrap()
    }

    fn facility(id: &str, accreditations: Value) -> FacilityRecord {
        FacilityRecord::from_value(json!({
            "facility_id": id,
            "facility_name": format!("Facility {id}"),
            "accreditations": accreditations
        }))
        .unwrap()
    }

    fn acc(body: &str, valid_until: &str) -> Value {
        json!({"accreditation_body": body, "accreditation_id": format!("{body}-1"), "valid_until": valid_until})
    }

    #[test]
    fn test_no_accreditations_excluded() {
        let f = facility("D", json!([]));
        assert_eq!(
            evaluate_facility(&f, &ctx()),
            Evaluation::Exclude(ExclusionReason::NoAccreditations)
        );
    }

    #[test]
    fn test_only_expired_excluded() {
        let f = facility("C", json!([acc("NCQA", "2023-12-01")]));
        assert_eq!(
            evaluate_facility(&f, &ctx()),
            Evaluation::Exclude(ExclusionReason::OnlyExpired)
        );
    }

    #[test]
    fn test_beyond_threshold_excluded() {
        let f = facility("B", json!([acc("NCQA", "2025-01-01")]));
        assert_eq!(
            evaluate_facility(&f, &ctx()),
            Evaluation::Exclude(ExclusionReason::NoneExpiringSoon)
        );
    }

    #[test]
    fn test_included_metadata() {
        let f = facility(
            "A",
            json!([
                acc("Joint Commission", "2024-03-15"),
                acc("CAP", "not-a-date"),
                acc("NCQA", "2023-06-01"),
                acc("CLIA", "2024-06-29")
            ]),
        );

        let Evaluation::Include(enriched) = evaluate_facility(&f, &ctx()) else {
            panic!("facility should be included");
        };

        let meta = &enriched.metadata;
        assert_eq!(meta.total_accreditation_count, 4);
        assert_eq!(meta.expiring_accreditations.len(), 2);
        assert_eq!(meta.expiring_accreditations[0].accreditation_body, "Joint Commission");
        assert_eq!(meta.expiring_accreditations[1].accreditation_body, "CLIA");
        assert_eq!(meta.processing_timestamp, ctx().evaluated_at);
        assert_eq!(enriched.facility, f);
    }

    #[test]
    fn test_input_not_mutated() {
        let f = facility("A", json!([acc("Joint Commission", "2024-03-15")]));
        let before = f.clone();
        let _ = evaluate_facility(&f, &ctx());
        assert_eq!(f, before);
    }

    #[test]
    fn test_batch_is_stable_filter() {
        let facilities = vec![
            facility("F1", json!([acc("X", "2024-02-01")])),
            facility("F2", json!([acc("X", "2026-02-01")])),
            facility("F3", json!([acc("X", "2024-05-01")])),
            facility("F4", json!([])),
            facility("F5", json!([acc("X", "2023-02-01")])),
            facility("F6", json!([acc("X", "2024-01-01")])),
        ];

        let result = evaluate_batch(&facilities, &ctx());
        let ids: Vec<&str> = result.included.iter().map(|e| e.facility.id.as_str()).collect();

        assert_eq!(ids, vec!["F1", "F3", "F6"]);
        assert_eq!(result.excluded_not_expiring, 1);
        assert_eq!(result.excluded_no_accreditations, 1);
        assert_eq!(result.excluded_only_expired, 1);
        assert_eq!(result.excluded(), 3);
    }
}
