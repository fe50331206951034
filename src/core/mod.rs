//! Core business logic for Sentinel.
//!
//! # Modules
//!
//! - [`ingest`] - Record loading from JSON array or JSON-lines payloads
//! - [`evaluate`] - Expiry window classification and include/exclude decisions
//! - [`output`] - NDJSON rendering and output checksums
//! - [`pipeline`] - Run orchestration and reporting
//!
//! # Processing Workflow
//!
//! 1. **Read**: Fetch every input payload from storage
//! 2. **Load**: Parse facilities, skipping and recording malformed records
//! 3. **Evaluate**: Classify accreditations against `[today, today + months * 30 days]`
//! 4. **Write**: Render included facilities with `_processing_metadata` as NDJSON
//! 5. **Report**: Write the processing summary
//!
//! # Example
//!
//! ```rust,no_run
//! use sentinel::config::load_config;
//! use sentinel::core::pipeline::PipelineCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("sentinel.toml")?;
//! let summary = PipelineCoordinator::new(config).execute().await?;
//!
//! println!("Included: {}", summary.included);
//! println!("Skipped records: {}", summary.skipped());
//! # Ok(())
//! # }
//! ```

pub mod evaluate;
pub mod ingest;
pub mod output;
pub mod pipeline;
