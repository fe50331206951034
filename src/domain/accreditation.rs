//! Accreditation records held by a facility

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date format accepted for `valid_until`
pub const VALID_UNTIL_FORMAT: &str = "%Y-%m-%d";

/// A certification held by a facility
///
/// `valid_until` is kept as the raw upstream string. Values that are missing, not
/// strings, or not `YYYY-MM-DD` dates are carried through untouched and simply never
/// count as expiring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccreditationRecord {
    /// Issuing body (e.g. "Joint Commission")
    #[serde(default, deserialize_with = "lenient_string")]
    pub accreditation_body: String,

    /// Identifier assigned by the issuing body
    #[serde(default, deserialize_with = "lenient_string")]
    pub accreditation_id: String,

    /// Expiry date as supplied upstream
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub valid_until: Option<String>,
}

impl AccreditationRecord {
    /// Creates a new accreditation record
    pub fn new(
        accreditation_body: impl Into<String>,
        accreditation_id: impl Into<String>,
        valid_until: Option<&str>,
    ) -> Self {
        Self {
            accreditation_body: accreditation_body.into(),
            accreditation_id: accreditation_id.into(),
            valid_until: valid_until.map(str::to_string),
        }
    }

    /// Parses `valid_until` as a calendar date
    ///
    /// Returns `None` when the value is absent or unparseable.
    pub fn valid_until_date(&self) -> Option<NaiveDate> {
        self.valid_until
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw.trim(), VALID_UNTIL_FORMAT).ok())
    }
}

/// Expiry classification of a single accreditation against an evaluation window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccreditationStatus {
    /// Expires within `[current_date, threshold_date]`
    ExpiringSoon(NaiveDate),

    /// Expired before `current_date`
    Expired(NaiveDate),

    /// Valid beyond `threshold_date`
    Valid(NaiveDate),

    /// No usable expiry date
    Undated,
}

impl AccreditationStatus {
    /// Returns true for [`AccreditationStatus::ExpiringSoon`]
    pub fn is_expiring_soon(&self) -> bool {
        matches!(self, Self::ExpiringSoon(_))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    })
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
