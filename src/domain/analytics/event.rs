//! Portal open events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ProposalId, QuestionnaireId, Timestamp};

/// Entity whose portal views are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum TrackedEntity {
    Proposal(ProposalId),
    Questionnaire(QuestionnaireId),
}

/// Immutable "opened" record. Events are only appended, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub entity: TrackedEntity,
    pub occurred_at: Timestamp,
}

impl AnalyticsEvent {
    pub fn opened(entity: TrackedEntity, occurred_at: Timestamp) -> Self {
        Self {
            entity,
            occurred_at,
        }
    }
}
