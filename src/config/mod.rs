//! Configuration management for Sentinel.
//!
//! Sentinel uses a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SENTINEL_<SECTION>_<KEY>` environment overrides
//! - Default values for optional settings
//! - Validation on load
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`SourceConfig`] - Input location and payload format
//! - [`OutputConfig`] - Output directory, file name, summary
//! - [`EvaluationConfig`] - Threshold months and current-date override
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [source]
//! input_path = "${SENTINEL_DATA_ROOT}/input"
//! format = "auto"
//!
//! [output]
//! output_dir = "${SENTINEL_DATA_ROOT}/filtered"
//!
//! [evaluation]
//! threshold_months = 6
//! ```
//!
//! ```rust,no_run
//! use sentinel::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sentinel.toml")?;
//! println!("Threshold: {} months", config.evaluation.threshold_months);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, EvaluationConfig, LoggingConfig, OutputConfig, SentinelConfig,
    SourceConfig,
};
