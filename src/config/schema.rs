//! Configuration schema types
//!
//! This module defines the configuration structure for Sentinel.

use crate::core::evaluate::DEFAULT_THRESHOLD_MONTHS;
use crate::core::ingest::PayloadFormat;
use crate::domain::accreditation::VALID_UNTIL_FORMAT;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Largest accepted look-ahead in months
pub const MAX_THRESHOLD_MONTHS: u32 = 120;

/// Main Sentinel configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentinelConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Where facility payloads are read from
    pub source: SourceConfig,

    /// Where filtered output is written
    pub output: OutputConfig,

    /// Expiry window settings
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SentinelConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.source.validate()?;
        self.output.validate()?;
        self.evaluation.validate()?;
        self.logging.validate()?;

        // Directory listings would pick up earlier output and summary files
        if same_location(&self.source.input_path, &self.output.output_dir) {
            return Err(format!(
                "output.output_dir '{}' must not be the input location '{}'",
                self.output.output_dir, self.source.input_path
            ));
        }

        Ok(())
    }
}

/// Whether two configured paths name the same location
///
/// Existing paths are compared after canonicalization, others lexically with `.`
/// components and trailing separators ignored.
fn same_location(a: &str, b: &str) -> bool {
    let (a, b) = (Path::new(a.trim()), Path::new(b.trim()));
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => lexical(a) == lexical(b),
    }
}

fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (evaluate and report, write nothing)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// A payload file, or a directory whose matching files are all read
    pub input_path: String,

    /// File extensions picked up from a directory
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Payload format (auto, json_array, json_lines)
    #[serde(default = "default_format")]
    pub format: String,
}

impl SourceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_path.trim().is_empty() {
            return Err("source.input_path cannot be empty".to_string());
        }

        if self.extensions.is_empty() || self.extensions.iter().any(|e| e.trim().is_empty()) {
            return Err("source.extensions must list at least one non-empty extension".to_string());
        }

        self.payload_format().map_err(|e| format!("source.format: {e}"))?;
        Ok(())
    }

    /// Parsed payload format
    pub fn payload_format(&self) -> crate::domain::Result<PayloadFormat> {
        PayloadFormat::from_str(&self.format)
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the output and summary files
    pub output_dir: String,

    /// Fixed output file name; a timestamped name is used when unset
    #[serde(default)]
    pub file_name: Option<String>,

    /// Write a processing summary next to the output
    #[serde(default = "default_true")]
    pub write_summary: bool,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.trim().is_empty() {
            return Err("output.output_dir cannot be empty".to_string());
        }

        if let Some(name) = &self.file_name {
            if name.trim().is_empty() {
                return Err("output.file_name cannot be empty when set".to_string());
            }
            if name.contains('/') || name.contains('\\') {
                return Err(format!(
                    "output.file_name must be a bare file name, got '{name}'"
                ));
            }
        }

        Ok(())
    }
}

/// Expiry window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Look-ahead in 30-day months
    #[serde(default = "default_threshold_months")]
    pub threshold_months: u32,

    /// Date to anchor the window on (YYYY-MM-DD); today's UTC date when unset
    #[serde(default)]
    pub current_date: Option<String>,
}

impl EvaluationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.threshold_months > MAX_THRESHOLD_MONTHS {
            return Err(format!(
                "evaluation.threshold_months must be between 0 and {MAX_THRESHOLD_MONTHS}, got {}",
                self.threshold_months
            ));
        }

        self.current_date()?;
        Ok(())
    }

    /// Parsed current-date override
    pub fn current_date(&self) -> Result<Option<NaiveDate>, String> {
        match &self.current_date {
            None => Ok(None),
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), VALID_UNTIL_FORMAT)
                .map(Some)
                .map_err(|e| {
                    format!("evaluation.current_date '{raw}' is not a YYYY-MM-DD date: {e}")
                }),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            threshold_months: default_threshold_months(),
            current_date: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default = "default_true")]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: true,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string(), "jsonl".to_string(), "ndjson".to_string()]
}

fn default_format() -> String {
    "auto".to_string()
}

fn default_threshold_months() -> u32 {
    DEFAULT_THRESHOLD_MONTHS
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal() -> SentinelConfig {
        toml::from_str(
            r#"
[source]
input_path = "data/input"

[output]
output_dir = "data/filtered"
"#,
        )
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = minimal();
        assert_eq!(config.application.log_level, "info");
        assert!(!config.application.dry_run);
        assert_eq!(config.source.format, "auto");
        assert_eq!(config.source.extensions, vec!["json", "jsonl", "ndjson"]);
        assert!(config.output.write_summary);
        assert!(config.output.file_name.is_none());
        assert_eq!(config.evaluation.threshold_months, 6);
        assert!(config.evaluation.current_date.is_none());
        assert_eq!(config.logging.local_rotation, "daily");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_log_level() {
        let mut config = minimal();
        config.application.log_level = "verbose".to_string();
        assert!(config.validate().unwrap_err().contains("log_level"));
    }

    #[test]
    fn test_invalid_format() {
        let mut config = minimal();
        config.source.format = "csv".to_string();
        assert!(config.validate().unwrap_err().contains("source.format"));
    }

    #[test]
    fn test_threshold_range() {
        let mut config = minimal();
        config.evaluation.threshold_months = 0;
        assert!(config.validate().is_ok());
        config.evaluation.threshold_months = MAX_THRESHOLD_MONTHS + 1;
        assert!(config.validate().is_err());
        config.evaluation.threshold_months = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_current_date_override() {
        let mut config = minimal();
        config.evaluation.current_date = Some("2024-01-01".to_string());
        assert_eq!(
            config.evaluation.current_date().unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );

        config.evaluation.current_date = Some("01/01/2024".to_string());
        assert!(config.validate().unwrap_err().contains("current_date"));
    }

    #[test]
    fn test_output_dir_must_differ_from_input() {
        let mut config = minimal();
        config.output.output_dir = "./data/input/".to_string();
        assert!(config.validate().unwrap_err().contains("output.output_dir"));

        let dir = tempfile::TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        std::fs::create_dir_all(&nested).unwrap();
        config.source.input_path = dir.path().display().to_string();
        config.output.output_dir = nested.join("..").display().to_string();
        assert!(config.validate().is_err());

        config.output.output_dir = nested.display().to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_name_must_be_bare() {
        let mut config = minimal();
        config.output.file_name = Some("../escape.jsonl".to_string());
        assert!(config.validate().is_err());
        config.output.file_name = Some("expiring.jsonl".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_rotation() {
        let mut config = minimal();
        config.logging.local_rotation = "size".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_source_section_fails_to_parse() {
        let result: Result<SentinelConfig, _> = toml::from_str("[output]\noutput_dir = \"x\"\n");
        assert!(result.is_err());
    }
}
