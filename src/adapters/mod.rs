//! External integrations
//!
//! - [`storage`] - Reading payloads and writing filtered output
//!
//! Adapters keep I/O out of the core stages, which work on bytes and in-memory
//! records only.

pub mod storage;

pub use storage::{create_storage, LocalStorage, Storage};
