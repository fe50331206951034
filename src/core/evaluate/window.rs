//! Expiry window arithmetic
//!
//! Months are a fixed 30 days. `threshold_months = 6` anchored on 2024-01-01 gives a
//! threshold date of 2024-06-29, not 2024-07-01.

use crate::domain::{AccreditationRecord, AccreditationStatus, Result, SentinelError};
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// Days counted per threshold month
pub const DAYS_PER_MONTH: i64 = 30;

/// Default look-ahead in months
pub const DEFAULT_THRESHOLD_MONTHS: u32 = 6;

/// Inputs shared by every facility evaluation in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Date the window is anchored on
    pub current_date: NaiveDate,

    /// Look-ahead in 30-day months
    pub threshold_months: u32,

    /// Instant recorded as the processing timestamp
    pub evaluated_at: DateTime<Utc>,

    threshold_date: NaiveDate,
}

impl EvaluationContext {
    /// Creates a context anchored on `current_date`
    ///
    /// # Errors
    ///
    /// Returns a validation error if the threshold date overflows the calendar.
    pub fn new(
        current_date: NaiveDate,
        threshold_months: u32,
        evaluated_at: DateTime<Utc>,
    ) -> Result<Self> {
        let threshold_date = Duration::try_days(i64::from(threshold_months) * DAYS_PER_MONTH)
            .and_then(|span| current_date.checked_add_signed(span))
            .ok_or_else(|| {
                SentinelError::Validation(format!(
                    "threshold of {threshold_months} months from {current_date} is out of range"
                ))
            })?;

        Ok(Self {
            current_date,
            threshold_months,
            evaluated_at,
            threshold_date,
        })
    }

    /// Creates a context for the current instant, optionally overriding the date
    pub fn now(current_date: Option<NaiveDate>, threshold_months: u32) -> Result<Self> {
        let evaluated_at = Utc::now();
        let current_date = current_date.unwrap_or_else(|| evaluated_at.date_naive());
        Self::new(current_date, threshold_months, evaluated_at)
    }

    /// Last date (inclusive) that still counts as expiring soon
    pub fn threshold_date(&self) -> NaiveDate {
        self.threshold_date
    }

    /// Classifies a single accreditation
    ///
    /// ```
    /// use sentinel::core::evaluate::EvaluationContext;
    /// use sentinel::domain::{AccreditationRecord, AccreditationStatus};
    /// use chrono::{NaiveDate, Utc};
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let ctx = EvaluationContext::new(today, 6, Utc::now()).unwrap();
    /// let acc = AccreditationRecord::new("Joint Commission", "JC-1", Some("2024-06-29"));
    /// assert!(ctx.classify(&acc).is_expiring_soon());
    /// ```
    pub fn classify(&self, accreditation: &AccreditationRecord) -> AccreditationStatus {
        match accreditation.valid_until_date() {
            None => AccreditationStatus::Undated,
            Some(date) if date < self.current_date => AccreditationStatus::Expired(date),
            Some(date) if date > self.threshold_date => AccreditationStatus::Valid(date),
            Some(date) => AccreditationStatus::ExpiringSoon(date),
        }
    }
}
