//! Process command implementation
//!
//! This module implements the `process` command: load facility payloads, keep the
//! facilities with accreditations expiring soon, and write them as NDJSON.

use super::{exit_code_for, EXIT_CONFIG, EXIT_OK};
use crate::config::{load_config, SentinelConfig};
use crate::core::pipeline::{PipelineCoordinator, RunSummary};
use clap::Args;

/// Arguments for the process command
#[derive(Args, Debug, Default)]
pub struct ProcessArgs {
    /// Override the input file or directory
    #[arg(short, long)]
    pub input: Option<String>,

    /// Override the output directory
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Override the look-ahead in 30-day months
    #[arg(short = 'm', long)]
    pub threshold_months: Option<u32>,

    /// Evaluate as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub current_date: Option<String>,

    /// Override the payload format (auto, json_array, json_lines)
    #[arg(long)]
    pub format: Option<String>,

    /// Dry run mode - evaluate and report without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl ProcessArgs {
    /// Execute the process command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting process command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("❌ Configuration validation failed: {e}");
            return Ok(EXIT_CONFIG);
        }

        if config.application.dry_run {
            println!("🔍 Dry run mode - no files will be written");
        }

        match PipelineCoordinator::new(config).execute().await {
            Ok(summary) => {
                print_summary(&summary);
                Ok(EXIT_OK)
            }
            Err(e) => {
                crate::log_error_with_context!(&e, "Processing run failed");
                eprintln!("❌ Processing failed: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }

    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut SentinelConfig) {
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.source.input_path = input.clone();
        }

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.output.output_dir = dir.clone();
        }

        if let Some(months) = self.threshold_months {
            tracing::info!(threshold_months = months, "Overriding threshold from CLI");
            config.evaluation.threshold_months = months;
        }

        if let Some(date) = &self.current_date {
            tracing::info!(current_date = %date, "Overriding current date from CLI");
            config.evaluation.current_date = Some(date.clone());
        }

        if let Some(format) = &self.format {
            config.source.format = format.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 Processing Summary");
    println!("====================");
    println!("Run ID: {}", summary.run_id);
    println!(
        "Window: {} to {} ({} months)",
        summary.current_date, summary.threshold_date, summary.threshold_months
    );
    println!("Input files: {}", summary.input_files.len());
    println!("Records seen: {}", summary.total_records());
    println!("Facilities loaded: {}", summary.loaded);
    println!("Records skipped: {}", summary.skipped());
    println!("Facilities included: {}", summary.included);
    println!(
        "Facilities excluded: {} (no accreditations: {}, only expired: {}, not expiring: {})",
        summary.excluded(),
        summary.excluded_no_accreditations,
        summary.excluded_only_expired,
        summary.excluded_not_expiring
    );
    if let Some(location) = &summary.output_location {
        println!("Output: {location}");
    }
    if let Some(location) = &summary.summary_location {
        println!("Summary: {location}");
    }
    println!("Duration: {:.2}s", summary.duration.as_secs_f64());

    if !summary.is_clean() {
        println!();
        println!("⚠️  Skipped records:");
        for error in summary.record_errors.iter().take(10) {
            println!("  - {error}");
        }
        if summary.record_errors.len() > 10 {
            println!("  ... and {} more", summary.record_errors.len() - 10);
        }
    }
}
