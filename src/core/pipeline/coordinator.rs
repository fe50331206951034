//! Pipeline coordinator - orchestrates a processing run
//!
//! Reads every input payload from storage, evaluates the combined batch, and writes
//! the filtered output (and processing summary) back to storage. All reads finish
//! before evaluation starts, and all writes happen after it ends.

use super::report::ProcessingReport;
use super::summary::RunSummary;
use super::ProcessedBatch;
use crate::adapters::storage::{create_storage, Storage};
use crate::config::SentinelConfig;
use crate::core::evaluate::EvaluationContext;
use crate::core::ingest::{load_facilities, LoadOutcome};
use crate::domain::{Result, SentinelError};
use std::sync::Arc;
use std::time::Instant;

/// Timestamp format used in generated file names
const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Pipeline coordinator
pub struct PipelineCoordinator {
    config: SentinelConfig,
    storage: Arc<dyn Storage>,
}

impl PipelineCoordinator {
    /// Create a coordinator using the storage described by the configuration
    pub fn new(config: SentinelConfig) -> Self {
        let storage = create_storage(&config);
        Self::with_storage(config, storage)
    }

    /// Create a coordinator with an explicit storage adapter
    pub fn with_storage(config: SentinelConfig, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Build the evaluation context for a run starting now
    pub fn evaluation_context(&self) -> Result<EvaluationContext> {
        let current_date = self
            .config
            .evaluation
            .current_date()
            .map_err(SentinelError::Configuration)?;
        EvaluationContext::now(current_date, self.config.evaluation.threshold_months)
    }

    /// Execute a processing run
    ///
    /// This is the main entry point. It:
    /// 1. Lists and reads every input payload
    /// 2. Loads facilities, collecting skipped records
    /// 3. Evaluates the whole batch against one context
    /// 4. Renders NDJSON output
    /// 5. Writes output and summary (skipped in dry-run mode)
    ///
    /// # Errors
    ///
    /// Fails on unreadable inputs, malformed payloads, and write failures. Skipped
    /// records are reported in the returned summary instead.
    pub async fn execute(&self) -> Result<RunSummary> {
        let start_time = Instant::now();
        let ctx = self.evaluation_context()?;
        let mut summary = RunSummary::new(&ctx);
        summary.dry_run = self.config.application.dry_run;

        crate::log_run_start!(summary.run_id, ctx.current_date, ctx.threshold_date());

        let format = self.config.source.payload_format()?;
        let inputs = self.storage.list_inputs().await?;
        if inputs.is_empty() {
            tracing::warn!("No input files found in input location");
        }

        let mut loaded = LoadOutcome::default();
        for key in &inputs {
            let bytes = self.storage.read(key).await?;
            let mut outcome = load_facilities(&bytes, format).map_err(|e| match e {
                SentinelError::MalformedPayload(msg) => {
                    SentinelError::MalformedPayload(format!("{key}: {msg}"))
                }
                other => other,
            })?;
            for error in &mut outcome.errors {
                error.source = Some(key.clone());
            }
            loaded.merge(outcome);
        }
        summary.input_files = inputs;

        let batch = ProcessedBatch::from_loaded(loaded, &ctx)?;
        summary.loaded = batch.load.facilities.len();
        summary.record_errors = batch.load.errors.clone();
        summary.record_evaluation(&batch.evaluation);
        summary.output_checksum = Some(batch.checksum());

        if summary.dry_run {
            tracing::info!(
                included = summary.included,
                bytes = batch.output.len(),
                "Dry run mode - skipping writes"
            );
        } else {
            let stamp = ctx.evaluated_at.format(FILE_TIMESTAMP_FORMAT).to_string();
            let output_key = self
                .config
                .output
                .file_name
                .clone()
                .unwrap_or_else(|| format!("expiring_facilities_{stamp}.jsonl"));

            self.storage.write(&output_key, &batch.output).await?;
            summary.output_location = Some(self.storage.output_location(&output_key));

            if self.config.output.write_summary {
                let summary_key = format!("processing_summary_{stamp}.json");
                let report = ProcessingReport::from_summary(&summary).to_json_bytes()?;
                self.storage.write(&summary_key, &report).await?;
                summary.summary_location = Some(self.storage.output_location(&summary_key));
            }
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();
        crate::log_run_complete!(summary.included, summary.duration);

        Ok(summary)
    }
}
