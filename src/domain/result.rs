//! Result type alias for Sentinel

use super::errors::SentinelError;

/// Result type alias for Sentinel operations
///
/// # Examples
///
/// ```
/// use sentinel::domain::result::Result;
/// use sentinel::domain::errors::SentinelError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SentinelError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SentinelError>;
