//! GetEngagementHandler - Query handler for a client's engagement report.

use std::sync::Arc;

use crate::domain::analytics::{AnalyticsAggregator, PortalEngagement, TrackedEntity};
use crate::domain::content::PortalError;
use crate::domain::foundation::{ClientId, Timestamp};
use crate::ports::{
    AnalyticsEventStore, ClientRepository, ProposalRepository, QuestionnaireRepository,
};

/// Query for a client's engagement figures.
#[derive(Debug, Clone)]
pub struct GetEngagementQuery {
    pub client_id: ClientId,
}

/// Builds per-entity view counts plus engagement and completion rates.
pub struct GetEngagementHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    events: Arc<dyn AnalyticsEventStore>,
}

impl GetEngagementHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        proposals: Arc<dyn ProposalRepository>,
        questionnaires: Arc<dyn QuestionnaireRepository>,
        events: Arc<dyn AnalyticsEventStore>,
    ) -> Self {
        Self {
            clients,
            proposals,
            questionnaires,
            events,
        }
    }

    pub async fn handle(&self, query: GetEngagementQuery) -> Result<PortalEngagement, PortalError> {
        if self.clients.find_by_id(&query.client_id).await?.is_none() {
            return Err(PortalError::ClientNotFound(query.client_id));
        }

        let proposals = self.proposals.list_by_client(&query.client_id).await?;
        let questionnaires = self.questionnaires.list_by_client(&query.client_id).await?;
        let tracked: Vec<TrackedEntity> = proposals
            .iter()
            .map(|p| TrackedEntity::Proposal(p.id))
            .chain(questionnaires.iter().map(|q| TrackedEntity::Questionnaire(q.id)))
            .collect();
        let events = self.events.list_for(&tracked).await?;

        Ok(AnalyticsAggregator::summarize(
            &proposals,
            &questionnaires,
            &events,
            Timestamp::now(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAnalyticsEventStore, InMemoryClientRepository, InMemoryProposalRepository,
        InMemoryQuestionnaireRepository,
    };
    use crate::application::handlers::test_support::{intake_template, stored_client};
    use crate::domain::analytics::AnalyticsEvent;
    use crate::domain::foundation::{Percentage, QuestionnaireId};
    use crate::domain::questionnaire::{Questionnaire, QuestionnaireStatus};

    #[tokio::test]
    async fn empty_client_reports_zero_rates() {
        let clients = Arc::new(InMemoryClientRepository::new());
        let client = stored_client(&clients, "Ada").await;
        let handler = GetEngagementHandler::new(
            clients,
            Arc::new(InMemoryProposalRepository::new()),
            Arc::new(InMemoryQuestionnaireRepository::new()),
            Arc::new(InMemoryAnalyticsEventStore::new()),
        );

        let report = handler
            .handle(GetEngagementQuery { client_id: client.id })
            .await
            .unwrap();

        assert!(report.entities.is_empty());
        assert_eq!(report.engagement_rate, Percentage::ZERO);
        assert_eq!(report.completion_rate, Percentage::ZERO);
    }

    #[tokio::test]
    async fn counts_views_and_completions() {
        let clients = Arc::new(InMemoryClientRepository::new());
        let questionnaires = Arc::new(InMemoryQuestionnaireRepository::new());
        let events = Arc::new(InMemoryAnalyticsEventStore::new());
        let client = stored_client(&clients, "Ada").await;
        let template = intake_template();
        let now = Timestamp::now();

        let opened =
            Questionnaire::issue(QuestionnaireId::new(), client.id, template.id, 14, now).unwrap();
        let mut done =
            Questionnaire::issue(QuestionnaireId::new(), client.id, template.id, 14, now).unwrap();
        done.status = QuestionnaireStatus::Completed;
        done.completed_at = Some(now);
        questionnaires.save(&opened).await.unwrap();
        questionnaires.save(&done).await.unwrap();
        let entity = TrackedEntity::Questionnaire(opened.id);
        events.append(AnalyticsEvent::opened(entity, now)).await.unwrap();
        events.append(AnalyticsEvent::opened(entity, now)).await.unwrap();

        let handler = GetEngagementHandler::new(
            clients,
            Arc::new(InMemoryProposalRepository::new()),
            questionnaires,
            events,
        );
        let report = handler
            .handle(GetEngagementQuery { client_id: client.id })
            .await
            .unwrap();

        assert_eq!(report.entities.len(), 2);
        let row = report.entities.iter().find(|e| e.entity == entity).unwrap();
        assert_eq!(row.view_count, 2);
        assert_eq!(report.engagement_rate, Percentage::new(50));
        assert_eq!(report.completion_rate, Percentage::new(50));
    }
}
