//! UTC instants used for due dates, expiry and activity tracking.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A UTC instant, serialized as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

/// Longest validity window, in days, accepted for proposals and questionnaires.
pub const MAX_VALIDITY_DAYS: u32 = 3650;

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// `None` when `secs` is outside chrono's representable range.
    pub fn from_unix_secs(secs: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp(secs, 0).map(Self)
    }

    /// Strictly later than `other`.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self > other
    }

    /// Whole days from `earlier` to `self`, truncated toward zero.
    pub fn days_since(&self, earlier: &Timestamp) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Shifts by `days` 24h days; `None` past chrono's representable range.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }

    /// Like `checked_add_days`, saturating at the earliest or latest instant.
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days).unwrap_or(if days < 0 {
            Self(DateTime::<Utc>::MIN_UTC)
        } else {
            Self(DateTime::<Utc>::MAX_UTC)
        })
    }

    pub fn minus_days(&self, days: i64) -> Self {
        match days.checked_neg() {
            Some(back) => self.add_days(back),
            None => Self(DateTime::<Utc>::MIN_UTC),
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
