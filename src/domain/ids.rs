//! Domain identifier types with validation
//!
//! Newtype wrappers keep facility identifiers from being mixed up with the other
//! free-form strings that travel through a facility record.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Facility identifier newtype wrapper
///
/// Unique within a batch. Upstream systems use values such as `FAC001`.
///
/// # Examples
///
/// ```
/// use sentinel::domain::ids::FacilityId;
/// use std::str::FromStr;
///
/// let id = FacilityId::from_str("FAC001").unwrap();
/// assert_eq!(id.as_str(), "FAC001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacilityId(String);

impl FacilityId {
    /// Creates a new FacilityId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(FacilityId)` if the ID is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Facility ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the facility ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FacilityId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for FacilityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
