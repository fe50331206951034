//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level
//! - JSON-formatted local log files with rotation
//!
//! # Example
//!
//! ```no_run
//! use sentinel::logging::init_logging;
//! use sentinel::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of a processing run
///
/// # Example
///
/// ```no_run
/// use sentinel::log_run_start;
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let threshold = NaiveDate::from_ymd_opt(2024, 6, 29).unwrap();
/// log_run_start!(Uuid::new_v4(), today, threshold);
/// ```
#[macro_export]
macro_rules! log_run_start {
    ($run_id:expr, $current_date:expr, $threshold_date:expr) => {
        tracing::info!(
            run_id = %$run_id,
            current_date = %$current_date,
            threshold_date = %$threshold_date,
            "Starting processing run"
        );
    };
}

/// Log the completion of a processing run
///
/// # Example
///
/// ```no_run
/// use sentinel::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(3, Duration::from_millis(250));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($included:expr, $duration:expr) => {
        tracing::info!(
            included = $included,
            duration_ms = $duration.as_millis() as u64,
            "Processing run finished"
        );
    };
}

/// Log a record skipped while loading
///
/// # Example
///
/// ```no_run
/// use sentinel::log_record_skipped;
/// use sentinel::domain::{RecordError, RecordErrorKind, RecordPosition};
///
/// let error = RecordError::new(RecordPosition::Line(2), RecordErrorKind::NotAnObject);
/// log_record_skipped!(&error);
/// ```
#[macro_export]
macro_rules! log_record_skipped {
    ($error:expr) => {
        tracing::warn!(
            position = %$error.position,
            facility_id = ?$error.facility_id,
            source = ?$error.source,
            reason = %$error.kind,
            "Skipping record"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use sentinel::log_error_with_context;
/// use sentinel::domain::SentinelError;
///
/// let error = SentinelError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
