//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::SentinelConfig;
use crate::domain::errors::SentinelError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into SentinelConfig
/// 4. Applies environment variable overrides (SENTINEL_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use sentinel::config::loader::load_config;
///
/// let config = load_config("sentinel.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<SentinelConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SentinelError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        SentinelError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Applies the same substitution, overrides and validation as [`load_config`].
pub fn parse_config(contents: &str) -> Result<SentinelConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: SentinelConfig = toml::from_str(&contents)
        .map_err(|e| SentinelError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        SentinelError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| SentinelError::Other(format!("invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(SentinelError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using SENTINEL_* prefix
///
/// Environment variables follow the pattern: SENTINEL_<SECTION>_<KEY>
/// For example: SENTINEL_SOURCE_INPUT_PATH, SENTINEL_EVALUATION_THRESHOLD_MONTHS
fn apply_env_overrides(config: &mut SentinelConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SENTINEL_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SENTINEL_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Source overrides
    if let Ok(val) = std::env::var("SENTINEL_SOURCE_INPUT_PATH") {
        config.source.input_path = val;
    }
    if let Ok(val) = std::env::var("SENTINEL_SOURCE_FORMAT") {
        config.source.format = val;
    }

    // Output overrides
    if let Ok(val) = std::env::var("SENTINEL_OUTPUT_OUTPUT_DIR") {
        config.output.output_dir = val;
    }
    if let Ok(val) = std::env::var("SENTINEL_OUTPUT_FILE_NAME") {
        config.output.file_name = Some(val);
    }
    if let Ok(val) = std::env::var("SENTINEL_OUTPUT_WRITE_SUMMARY") {
        config.output.write_summary = val.parse().unwrap_or(true);
    }

    // Evaluation overrides
    if let Ok(val) = std::env::var("SENTINEL_EVALUATION_THRESHOLD_MONTHS") {
        if let Ok(months) = val.parse() {
            config.evaluation.threshold_months = months;
        }
    }
    if let Ok(val) = std::env::var("SENTINEL_EVALUATION_CURRENT_DATE") {
        config.evaluation.current_date = Some(val);
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SENTINEL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SENTINEL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
