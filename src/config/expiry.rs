//! Proposal and questionnaire validity windows

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::foundation::MAX_VALIDITY_DAYS;

use super::error::ValidationError;

fn check_window(field: &'static str, days: u32) -> Result<(), ValidationError> {
    match days {
        0 => Err(ValidationError::NonPositiveDays(field)),
        d if d > MAX_VALIDITY_DAYS => Err(ValidationError::TooManyDays(field, MAX_VALIDITY_DAYS)),
        _ => Ok(()),
    }
}

/// Proposal defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposalsConfig {
    /// Used when a proposal is created without `expires_in_days`
    #[serde(default = "default_proposal_days")]
    pub default_expires_in_days: u32,
}

impl ProposalsConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_window("proposals.default_expires_in_days", self.default_expires_in_days)
    }
}

impl Default for ProposalsConfig {
    fn default() -> Self {
        Self {
            default_expires_in_days: default_proposal_days(),
        }
    }
}

/// Questionnaire defaults and template source.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionnairesConfig {
    #[serde(default = "default_questionnaire_days")]
    pub default_expires_in_days: u32,

    /// YAML file with the template catalog; empty catalog when unset
    pub template_seed_path: Option<PathBuf>,
}

impl QuestionnairesConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_window(
            "questionnaires.default_expires_in_days",
            self.default_expires_in_days,
        )
    }
}

impl Default for QuestionnairesConfig {
    fn default() -> Self {
        Self {
            default_expires_in_days: default_questionnaire_days(),
            template_seed_path: None,
        }
    }
}

fn default_proposal_days() -> u32 {
    30
}

fn default_questionnaire_days() -> u32 {
    14
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ProposalsConfig::default().validate().is_ok());
        assert!(QuestionnairesConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_day_windows_are_rejected() {
        let proposals = ProposalsConfig {
            default_expires_in_days: 0,
        };
        assert!(proposals.validate().is_err());

        let questionnaires = QuestionnairesConfig {
            default_expires_in_days: 0,
            template_seed_path: None,
        };
        assert!(questionnaires.validate().is_err());
    }

    #[test]
    fn windows_longer_than_ten_years_are_rejected() {
        let proposals = ProposalsConfig {
            default_expires_in_days: MAX_VALIDITY_DAYS + 1,
        };
        assert_eq!(
            proposals.validate(),
            Err(ValidationError::TooManyDays(
                "proposals.default_expires_in_days",
                MAX_VALIDITY_DAYS
            ))
        );
    }
}
