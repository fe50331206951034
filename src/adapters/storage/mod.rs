//! Storage adapters
//!
//! Binds the pipeline's byte-level inputs and outputs to a concrete location.

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::Storage;

use crate::config::SentinelConfig;
use std::sync::Arc;

/// Create the storage adapter described by the configuration
pub fn create_storage(config: &SentinelConfig) -> Arc<dyn Storage> {
    tracing::debug!(
        input_path = %config.source.input_path,
        output_dir = %config.output.output_dir,
        "Creating local storage adapter"
    );
    Arc::new(LocalStorage::new(
        &config.source.input_path,
        &config.source.extensions,
        &config.output.output_dir,
    ))
}
