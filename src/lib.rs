// Sentinel - Accreditation Expiry Filter
// Copyright (c) 2025 Sentinel Contributors
// Licensed under the MIT License

//! # Sentinel - Accreditation Expiry Filter
//!
//! Sentinel reads batches of healthcare facility records and keeps the facilities
//! holding at least one accreditation that expires soon. Each kept facility is
//! written unchanged as one NDJSON line, extended with a `_processing_metadata`
//! object describing the expiring accreditations.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (ingest, evaluate, output, pipeline)
//! - [`adapters`] - Storage integrations
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sentinel::config::load_config;
//! use sentinel::core::pipeline::PipelineCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("sentinel.toml")?;
//!     let summary = PipelineCoordinator::new(config).execute().await?;
//!
//!     println!("Kept {} facilities", summary.included);
//!     Ok(())
//! }
//! ```
//!
//! ## Expiry Window
//!
//! An accreditation is expiring soon when its `valid_until` date falls within
//! `[current_date, current_date + threshold_months * 30 days]`, both ends inclusive:
//!
//! ```rust
//! use sentinel::core::evaluate::EvaluationContext;
//! use sentinel::domain::AccreditationRecord;
//! use chrono::{NaiveDate, Utc};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let ctx = EvaluationContext::new(today, 6, Utc::now()).unwrap();
//! assert_eq!(ctx.threshold_date(), NaiveDate::from_ymd_opt(2024, 6, 29).unwrap());
//!
//! let record = AccreditationRecord::new("JC", "JC-1", Some("2024-06-29"));
//! assert!(ctx.classify(&record).is_expiring_soon());
//! ```
//!
//! ## Error Handling
//!
//! Run-level failures use [`domain::SentinelError`]. Individual records that cannot
//! be loaded become [`domain::RecordError`] values collected in the run summary.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
