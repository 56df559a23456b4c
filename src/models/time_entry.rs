use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

/// Slack when comparing sums of decimal hours, so `0.1 + 16.1 + 7.8` still
/// counts as exactly 24.
pub const HOURS_TOLERANCE: f64 = 1e-9;

/// `true` when `total` is above `max` by more than rounding noise.
pub fn exceeds_limit(total: f64, max: f64) -> bool {
    total - max > HOURS_TOLERANCE
}

/// A single block of logged work against a charge code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    /// Friendly name of the charge code.
    pub charge_code: String,
    pub hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl TimeEntry {
    /// Build a new entry, rejecting hours outside `(0, 24]`.
    /// Blank notes are stored as `None`.
    pub fn new(
        date: NaiveDate,
        charge_code: impl Into<String>,
        hours: f64,
        notes: Option<String>,
    ) -> AppResult<Self> {
        validate_hours(hours)?;

        let now = Local::now();
        Ok(Self {
            id: Uuid::new_v4(),
            date,
            charge_code: charge_code.into(),
            hours,
            notes: notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            created_at: now,
            updated_at: now,
        })
    }
}

pub fn validate_hours(hours: f64) -> AppResult<()> {
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_HOURS_PER_ENTRY {
        return Err(AppError::InvalidHours(hours.to_string()));
    }
    Ok(())
}
