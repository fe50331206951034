//! Processing pipeline
//!
//! Composes the three stages (load, evaluate, write) into a run:
//!
//! - [`ProcessedBatch`] - pure composition over in-memory payloads
//! - [`PipelineCoordinator`] - binds the stages to a storage adapter
//! - [`RunSummary`] / [`ProcessingReport`] - run reporting

pub mod coordinator;
pub mod report;
pub mod summary;

pub use coordinator::PipelineCoordinator;
pub use report::ProcessingReport;
pub use summary::{FacilityDigest, RunSummary};

use crate::core::evaluate::{evaluate_batch, BatchEvaluation, EvaluationContext};
use crate::core::ingest::{load_facilities, LoadOutcome, PayloadFormat};
use crate::core::output::{calculate_checksum_bytes, write_ndjson};
use crate::domain::Result;

/// A batch taken through all three stages without touching storage
#[derive(Debug, Clone)]
pub struct ProcessedBatch {
    /// Loader outcome (facilities and skipped records)
    pub load: LoadOutcome,
    /// Evaluator outcome
    pub evaluation: BatchEvaluation,
    /// Rendered NDJSON output
    pub output: Vec<u8>,
}

impl ProcessedBatch {
    /// Evaluates and renders an already-loaded batch
    pub fn from_loaded(load: LoadOutcome, ctx: &EvaluationContext) -> Result<Self> {
        let evaluation = evaluate_batch(&load.facilities, ctx);
        let output = write_ndjson(&evaluation.included)?;
        Ok(Self {
            load,
            evaluation,
            output,
        })
    }

    /// SHA-256 of the rendered output
    pub fn checksum(&self) -> String {
        calculate_checksum_bytes(&self.output)
    }
}

/// Loads, evaluates and renders a single payload
///
/// # Examples
///
/// ```
/// use sentinel::core::evaluate::EvaluationContext;
/// use sentinel::core::ingest::PayloadFormat;
/// use sentinel::core::pipeline::process_payload;
/// use chrono::{NaiveDate, Utc};
///
/// let payload = br#"[{"facility_id": "FAC001", "facility_name": "Test Hospital",
///   "accreditations": [{"accreditation_body": "JC", "valid_until": "2024-02-01"}]}]"#;
/// let ctx = EvaluationContext::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 6, Utc::now()).unwrap();
///
/// let batch = process_payload(payload, PayloadFormat::Auto, &ctx).unwrap();
/// assert_eq!(batch.evaluation.included.len(), 1);
/// assert!(batch.output.ends_with(b"\n"));
/// ```
pub fn process_payload(
    payload: &[u8],
    format: PayloadFormat,
    ctx: &EvaluationContext,
) -> Result<ProcessedBatch> {
    let load = load_facilities(payload, format)?;
    ProcessedBatch::from_loaded(load, ctx)
}
