//! Output checksums
//!
//! The processing summary records a SHA-256 digest of the written output so that
//! consumers can confirm they read the same bytes the run produced.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of raw bytes
///
/// Returns a hex-encoded SHA-256 checksum string (64 characters).
///
/// # Examples
///
/// ```
/// use sentinel::core::output::calculate_checksum_bytes;
///
/// let checksum = calculate_checksum_bytes(b"");
/// assert_eq!(checksum.len(), 64);
/// ```
pub fn calculate_checksum_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    format!("{:x}", hasher.finalize())
}
