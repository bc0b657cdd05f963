//! Client lifecycle thresholds

use serde::Deserialize;

use crate::domain::client::LifecyclePolicy;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct LifecycleConfig {
    #[serde(default = "default_inactive_after_days")]
    pub inactive_after_days: i64,

    #[serde(default = "default_churned_after_days")]
    pub churned_after_days: i64,
}

impl LifecycleConfig {
    pub fn policy(&self) -> LifecyclePolicy {
        LifecyclePolicy {
            inactive_after_days: self.inactive_after_days,
            churned_after_days: self.churned_after_days,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.inactive_after_days < 1 {
            return Err(ValidationError::NonPositiveDays("lifecycle.inactive_after_days"));
        }
        if self.churned_after_days <= self.inactive_after_days {
            return Err(ValidationError::InvalidLifecycleThresholds);
        }
        Ok(())
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            inactive_after_days: default_inactive_after_days(),
            churned_after_days: default_churned_after_days(),
        }
    }
}

fn default_inactive_after_days() -> i64 {
    90
}

fn default_churned_after_days() -> i64 {
    180
}
