//! Result writing
//!
//! Serializes included facilities back to newline-delimited JSON. The functions here
//! produce bytes only; binding those bytes to a location is the storage adapter's job.

pub mod checksum;
pub mod ndjson;

pub use checksum::calculate_checksum_bytes;
pub use ndjson::{write_ndjson, write_ndjson_to};
