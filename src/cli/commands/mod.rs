//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod init;
pub mod process;
pub mod validate;

use crate::domain::SentinelError;

/// Successful run
pub const EXIT_OK: i32 = 0;
/// Configuration could not be loaded or is invalid
pub const EXIT_CONFIG: i32 = 2;
/// Input could not be read or parsed
pub const EXIT_INPUT: i32 = 4;
/// Any other fatal failure, including failed writes
pub const EXIT_FATAL: i32 = 5;

/// Maps a run-level error to the process exit code
pub fn exit_code_for(error: &SentinelError) -> i32 {
    match error {
        SentinelError::Configuration(_) | SentinelError::Validation(_) => EXIT_CONFIG,
        SentinelError::MalformedPayload(_) | SentinelError::Storage(_) => EXIT_INPUT,
        SentinelError::WriteFailure(_)
        | SentinelError::Serialization(_)
        | SentinelError::Io(_)
        | SentinelError::Other(_) => EXIT_FATAL,
    }
}
