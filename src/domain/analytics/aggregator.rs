//! AnalyticsAggregator - folds open events into engagement figures.
//!
//! Aggregation is a pure fold over the event sequence; the result does not
//! depend on event order.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::{Percentage, Timestamp};
use crate::domain::proposal::Proposal;
use crate::domain::questionnaire::{Questionnaire, QuestionnaireStatus};

use super::{AnalyticsEvent, TrackedEntity};

/// Views of a single entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityViews {
    pub count: usize,
    pub last_viewed: Option<Timestamp>,
}

/// Per-entity view counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewStats {
    views: HashMap<TrackedEntity, EntityViews>,
}

impl ViewStats {
    /// Builds counters in a single pass.
    pub fn fold<'a>(events: impl IntoIterator<Item = &'a AnalyticsEvent>) -> Self {
        let mut views: HashMap<TrackedEntity, EntityViews> = HashMap::new();
        for event in events {
            let entry = views.entry(event.entity).or_default();
            entry.count += 1;
            entry.last_viewed = Some(match entry.last_viewed {
                Some(last) if last >= event.occurred_at => last,
                _ => event.occurred_at,
            });
        }
        Self { views }
    }

    pub fn view_count(&self, entity: &TrackedEntity) -> usize {
        self.views.get(entity).map_or(0, |v| v.count)
    }

    pub fn last_viewed(&self, entity: &TrackedEntity) -> Option<Timestamp> {
        self.views.get(entity).and_then(|v| v.last_viewed)
    }

    pub fn views(&self, entity: &TrackedEntity) -> EntityViews {
        self.views.get(entity).copied().unwrap_or_default()
    }

    /// Share of `entities` viewed at least once, rounded.
    pub fn engagement_rate(&self, entities: &[TrackedEntity]) -> Percentage {
        let viewed = entities
            .iter()
            .filter(|e| self.view_count(e) > 0)
            .count();
        Percentage::rounded_ratio(viewed, entities.len())
    }
}

/// One row of the engagement report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityEngagement {
    pub entity: TrackedEntity,
    pub view_count: usize,
    pub last_viewed: Option<Timestamp>,
}

/// Engagement figures for one client's portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalEngagement {
    pub entities: Vec<EntityEngagement>,
    pub engagement_rate: Percentage,
    pub completion_rate: Percentage,
}

/// Stateless aggregation functions.
pub struct AnalyticsAggregator;

impl AnalyticsAggregator {
    /// Creates the event for an open; the caller appends it to the store.
    pub fn record_open(entity: TrackedEntity, at: Timestamp) -> AnalyticsEvent {
        AnalyticsEvent::opened(entity, at)
    }

    /// Share of questionnaires completed, by effective status at `now`.
    pub fn completion_rate(questionnaires: &[Questionnaire], now: Timestamp) -> Percentage {
        let completed = questionnaires
            .iter()
            .filter(|q| q.effective_status(now) == QuestionnaireStatus::Completed)
            .count();
        Percentage::rounded_ratio(completed, questionnaires.len())
    }

    /// Full report over a client's proposals and questionnaires.
    pub fn summarize(
        proposals: &[Proposal],
        questionnaires: &[Questionnaire],
        events: &[AnalyticsEvent],
        now: Timestamp,
    ) -> PortalEngagement {
        let stats = ViewStats::fold(events);
        let tracked: Vec<TrackedEntity> = proposals
            .iter()
            .map(|p| TrackedEntity::Proposal(p.id))
            .chain(
                questionnaires
                    .iter()
                    .map(|q| TrackedEntity::Questionnaire(q.id)),
            )
            .collect();

        let entities = tracked
            .iter()
            .map(|entity| {
                let views = stats.views(entity);
                EntityEngagement {
                    entity: *entity,
                    view_count: views.count,
                    last_viewed: views.last_viewed,
                }
            })
            .collect();

        PortalEngagement {
            entities,
            engagement_rate: stats.engagement_rate(&tracked),
            completion_rate: Self::completion_rate(questionnaires, now),
        }
    }
}
