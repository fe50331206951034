//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Sentinel configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Input Path: {}", config.source.input_path);
        println!("  Extensions: {:?}", config.source.extensions);
        println!("  Payload Format: {}", config.source.format);
        println!("  Output Directory: {}", config.output.output_dir);
        println!(
            "  Output File: {}",
            config
                .output
                .file_name
                .as_deref()
                .unwrap_or("<timestamped>")
        );
        println!("  Write Summary: {}", config.output.write_summary);
        println!(
            "  Threshold: {} months",
            config.evaluation.threshold_months
        );
        println!(
            "  Current Date: {}",
            config
                .evaluation
                .current_date
                .as_deref()
                .unwrap_or("<today>")
        );
        println!();
        Ok(EXIT_OK)
    }
}
