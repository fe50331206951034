//! Storage abstraction traits
//!
//! This module defines the trait that storage adapters implement so the pipeline
//! can read payloads and write results without knowing where they live.

use crate::domain::Result;
use async_trait::async_trait;

/// Storage binding for facility payloads and filtered output
///
/// Input keys are the values returned by [`Storage::list_inputs`]. Output keys are
/// bare names inside the adapter's output location.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Lists input payloads in processing order
    ///
    /// # Errors
    ///
    /// Returns an error if the input location cannot be read.
    async fn list_inputs(&self) -> Result<Vec<String>>;

    /// Reads a whole input payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be read.
    async fn read(&self, key: &str) -> Result<Vec<u8>>;

    /// Writes an output object, replacing any previous content
    ///
    /// Either the complete data is visible under `key` afterwards or the previous
    /// content (if any) is left in place.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::SentinelError::WriteFailure`] if the write fails.
    async fn write(&self, key: &str, data: &[u8]) -> Result<()>;

    /// Human-readable location of an output key, for logs and summaries
    fn output_location(&self, key: &str) -> String;
}
