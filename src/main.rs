// Sentinel - Accreditation Expiry Filter
// Copyright (c) 2025 Sentinel Contributors
// Licensed under the MIT License

use clap::Parser;
use sentinel::cli::commands::EXIT_FATAL;
use sentinel::cli::{Cli, Commands};
use sentinel::config::{load_config, LoggingConfig};
use sentinel::logging::{init_logging, LoggingGuard};
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let _guard = match setup_logging(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Sentinel - Accreditation Expiry Filter"
    );

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            EXIT_FATAL
        }
    };

    // Flush file logs before exiting
    drop(_guard);
    process::exit(exit_code);
}

/// Console-only logging unless `process` runs with a loadable config
fn setup_logging(cli: &Cli) -> sentinel::domain::Result<LoggingGuard> {
    let file_config = match &cli.command {
        Commands::Process(_) => load_config(&cli.config).ok(),
        _ => None,
    };

    let log_level = cli
        .log_level
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());

    let logging_config = file_config.map(|c| c.logging).unwrap_or(LoggingConfig {
        local_enabled: false,
        ..LoggingConfig::default()
    });

    init_logging(&log_level, &logging_config)
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Process(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Init(args) => args.execute().await,
    }
}
