//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sentinel using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sentinel - accreditation expiry filter for facility records
#[derive(Parser, Debug)]
#[command(name = "sentinel")]
#[command(version, about, long_about = None)]
#[command(author = "Sentinel Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "sentinel.toml", env = "SENTINEL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SENTINEL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter facilities with accreditations expiring soon
    Process(commands::process::ProcessArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_process() {
        let cli = Cli::parse_from(["sentinel", "process"]);
        assert_eq!(cli.config, "sentinel.toml");
        assert!(matches!(cli.command, Commands::Process(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["sentinel", "--config", "custom.toml", "process"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["sentinel", "--log-level", "debug", "process"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["sentinel", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_process_overrides() {
        let cli = Cli::parse_from([
            "sentinel",
            "process",
            "--input",
            "data/facilities.json",
            "--threshold-months",
            "3",
            "--current-date",
            "2024-01-01",
            "--dry-run",
        ]);
        match cli.command {
            Commands::Process(args) => {
                assert_eq!(args.input.as_deref(), Some("data/facilities.json"));
                assert_eq!(args.threshold_months, Some(3));
                assert_eq!(args.current_date.as_deref(), Some("2024-01-01"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["sentinel", "init", "--output", "x.toml", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert_eq!(args.output, "x.toml");
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
