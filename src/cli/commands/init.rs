//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "sentinel.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Sentinel configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your input and output paths", self.output);
                println!("  2. Validate configuration: sentinel validate-config");
                println!("  3. Run: sentinel process");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate a commented configuration with every option
    pub fn generate_config() -> String {
        r#"# Sentinel Configuration File
# Filters facility records down to those with accreditations expiring soon.
#
# Values may reference environment variables with ${VAR_NAME}.
# Any key can also be overridden with SENTINEL_<SECTION>_<KEY>.

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (evaluate and report, write nothing)
dry_run = false

[source]
# A payload file, or a directory whose matching files are all read
input_path = "./data/input"

# File extensions picked up from a directory
extensions = ["json", "jsonl", "ndjson"]

# Payload format: auto | json_array | json_lines
format = "auto"

[output]
# Directory receiving the filtered NDJSON and the processing summary
output_dir = "./data/filtered"

# Fixed output file name; defaults to expiring_facilities_<YYYYMMDD_HHMMSS>.jsonl
# file_name = "expiring_facilities.jsonl"

# Write processing_summary_<YYYYMMDD_HHMMSS>.json next to the output
write_summary = true

[evaluation]
# Look-ahead in months, each month counted as 30 days (0-120)
threshold_months = 6

# Evaluate as of this date instead of today (YYYY-MM-DD)
# current_date = "2024-01-01"

[logging]
local_enabled = true
local_path = "./logs"
local_rotation = "daily"  # daily | hourly
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_parses() {
        let config = parse_config(&InitArgs::generate_config()).unwrap();
        assert_eq!(config.evaluation.threshold_months, 6);
        assert_eq!(config.source.format, "auto");
        assert!(config.output.file_name.is_none());
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sentinel.toml");
        fs::write(&path, "existing").unwrap();

        let args = InitArgs {
            output: path.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), EXIT_CONFIG);
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().await.unwrap(), EXIT_OK);
        assert!(fs::read_to_string(&path).unwrap().contains("[evaluation]"));
    }
}
