//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX.

use sentinel::config::load_config;
use sentinel::core::ingest::PayloadFormat;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("SENTINEL_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SENTINEL_APPLICATION_DRY_RUN");
    std::env::remove_var("SENTINEL_EVALUATION_THRESHOLD_MONTHS");
    std::env::remove_var("SENTINEL_EVALUATION_CURRENT_DATE");
    std::env::remove_var("SENTINEL_SOURCE_INPUT_PATH");
    std::env::remove_var("TEST_SENTINEL_INPUT_DIR");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"
dry_run = true

[source]
input_path = "/data/facilities"
extensions = ["json"]
format = "json_lines"

[output]
output_dir = "/data/filtered"
file_name = "expiring.jsonl"
write_summary = false

[evaluation]
threshold_months = 3
current_date = "2024-01-01"

[logging]
local_enabled = false
local_path = "/tmp/sentinel"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);
    assert_eq!(config.source.input_path, "/data/facilities");
    assert_eq!(config.source.extensions, vec!["json".to_string()]);
    assert_eq!(config.source.payload_format().unwrap(), PayloadFormat::JsonLines);
    assert_eq!(config.output.file_name.as_deref(), Some("expiring.jsonl"));
    assert!(!config.output.write_summary);
    assert_eq!(config.evaluation.threshold_months, 3);
    assert_eq!(
        config.evaluation.current_date().unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
    );
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
input_path = "in"

[output]
output_dir = "out"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.evaluation.threshold_months, 6);
    assert!(config.evaluation.current_date.is_none());
    assert_eq!(config.source.payload_format().unwrap(), PayloadFormat::Auto);
    assert!(config.output.write_summary);
    assert!(config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_SENTINEL_INPUT_DIR", "/mnt/incoming");

    let file = write_config(
        r#"
[source]
input_path = "${TEST_SENTINEL_INPUT_DIR}"

[output]
output_dir = "out"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.source.input_path, "/mnt/incoming");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[source]
input_path = "${TEST_SENTINEL_INPUT_DIR}"

[output]
output_dir = "out"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_SENTINEL_INPUT_DIR"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SENTINEL_APPLICATION_DRY_RUN", "true");
    std::env::set_var("SENTINEL_EVALUATION_THRESHOLD_MONTHS", "12");
    std::env::set_var("SENTINEL_EVALUATION_CURRENT_DATE", "2024-02-29");

    let file = write_config(
        r#"
[source]
input_path = "in"

[output]
output_dir = "out"

[evaluation]
threshold_months = 6
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(config.application.dry_run);
    assert_eq!(config.evaluation.threshold_months, 12);
    assert_eq!(config.evaluation.current_date.as_deref(), Some("2024-02-29"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("SENTINEL_EVALUATION_CURRENT_DATE", "not-a-date");

    let file = write_config(
        r#"
[source]
input_path = "in"

[output]
output_dir = "out"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("current_date"));

    cleanup_env_vars();
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        ("[evaluation]\nthreshold_months = 121", "threshold_months"),
        ("[application]\nlog_level = \"loud\"", "log_level"),
        ("[logging]\nlocal_rotation = \"size\"", "local_rotation"),
    ];

    for (extra, needle) in cases {
        let file = write_config(&format!(
            "[source]\ninput_path = \"in\"\nformat = \"auto\"\n\n[output]\noutput_dir = \"out\"\n\n{extra}\n"
        ));
        let err = load_config(file.path()).unwrap_err();
        assert!(
            err.to_string().contains(needle),
            "expected '{needle}' in '{err}'"
        );
    }
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/sentinel.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
