//! Pricing configuration

use serde::Deserialize;

use crate::domain::pricing::{PricingPolicy, MAX_INTERVAL_DAYS};

use super::error::ValidationError;

/// Payment schedule tuning.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Days between installments and between recurring charges
    #[serde(default = "default_interval_days")]
    pub recurrence_interval_days: u32,

    /// Days after the schedule start at which a partial balance is due
    #[serde(default = "default_interval_days")]
    pub partial_remainder_due_days: u32,
}

impl PricingConfig {
    pub fn policy(&self) -> PricingPolicy {
        PricingPolicy {
            interval_days: self.recurrence_interval_days,
            partial_remainder_due_days: self.partial_remainder_due_days,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.recurrence_interval_days == 0 {
            return Err(ValidationError::NonPositiveDays("recurrence_interval_days"));
        }
        for (field, days) in [
            ("recurrence_interval_days", self.recurrence_interval_days),
            ("partial_remainder_due_days", self.partial_remainder_due_days),
        ] {
            if days > MAX_INTERVAL_DAYS {
                return Err(ValidationError::TooManyDays(field, MAX_INTERVAL_DAYS));
            }
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            recurrence_interval_days: default_interval_days(),
            partial_remainder_due_days: default_interval_days(),
        }
    }
}

fn default_interval_days() -> u32 {
    30
}
