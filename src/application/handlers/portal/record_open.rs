//! RecordOpenHandler - Command handler for portal view tracking.

use std::sync::Arc;

use crate::application::handlers::activity::touch_client;
use crate::domain::analytics::{AnalyticsAggregator, AnalyticsEvent, TrackedEntity};
use crate::domain::content::PortalError;
use crate::domain::foundation::{ClientId, Timestamp};
use crate::ports::{
    AnalyticsEventStore, ClientRepository, ProposalRepository, QuestionnaireRepository,
};

/// Command recording that a client opened an entity.
#[derive(Debug, Clone)]
pub struct RecordOpenCommand {
    pub entity: TrackedEntity,
}

pub struct RecordOpenHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    events: Arc<dyn AnalyticsEventStore>,
}

impl RecordOpenHandler {
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

    pub async fn handle(&self, cmd: RecordOpenCommand) -> Result<AnalyticsEvent, PortalError> {
        let client_id = self.owner_of(&cmd.entity).await?;
        let now = Timestamp::now();

        let event = AnalyticsAggregator::record_open(cmd.entity, now);
        self.events.append(event).await?;
        touch_client(self.clients.as_ref(), &client_id, now).await?;

        tracing::debug!(entity = ?cmd.entity, client_id = %client_id, "Portal open recorded");
        Ok(event)
    }

    async fn owner_of(&self, entity: &TrackedEntity) -> Result<ClientId, PortalError> {
        match entity {
            TrackedEntity::Proposal(id) => self
                .proposals
                .find_by_id(id)
                .await?
                .map(|p| p.client_id)
                .ok_or(PortalError::ProposalNotFound(*id)),
            TrackedEntity::Questionnaire(id) => self
                .questionnaires
                .find_by_id(id)
                .await?
                .map(|q| q.client_id)
                .ok_or(PortalError::QuestionnaireNotFound(*id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryAnalyticsEventStore, InMemoryClientRepository, InMemoryProposalRepository,
        InMemoryQuestionnaireRepository,
    };
    use crate::application::handlers::test_support::stored_client;
    use crate::domain::foundation::{Money, ProposalId, QuestionnaireId};
    use crate::domain::pricing::{PaymentTerms, PricingEngine};
    use crate::domain::proposal::{Proposal, ProposalDraft};

    #[tokio::test]
    async fn appends_event_and_touches_owner() {
        let clients = Arc::new(InMemoryClientRepository::new());
        let proposals = Arc::new(InMemoryProposalRepository::new());
        let events = Arc::new(InMemoryAnalyticsEventStore::new());
        let client = stored_client(&clients, "Ada").await;
        let proposal = Proposal::create(
            ProposalId::new(),
            ProposalDraft {
                client_id: client.id,
                title: "Audit".to_string(),
                selected_services: vec![],
                custom_services: vec![],
                terms: PaymentTerms::full(Money::from_cents(10_000)),
                expires_in_days: 7,
            },
            &PricingEngine::default(),
            Timestamp::now(),
        )
        .unwrap();
        proposals.save(&proposal).await.unwrap();
        let handler = RecordOpenHandler::new(
            clients.clone(),
            proposals,
            Arc::new(InMemoryQuestionnaireRepository::new()),
            events.clone(),
        );

        let entity = TrackedEntity::Proposal(proposal.id);
        handler.handle(RecordOpenCommand { entity }).await.unwrap();
        handler.handle(RecordOpenCommand { entity }).await.unwrap();

        assert_eq!(events.len().await, 2);
        let client = clients.find_by_id(&client.id).await.unwrap().unwrap();
        assert!(client.last_activity.is_some());
    }

    #[tokio::test]
    async fn unknown_entity_is_not_recorded() {
        let events = Arc::new(InMemoryAnalyticsEventStore::new());
        let handler = RecordOpenHandler::new(
            Arc::new(InMemoryClientRepository::new()),
            Arc::new(InMemoryProposalRepository::new()),
            Arc::new(InMemoryQuestionnaireRepository::new()),
            events.clone(),
        );
        let id = QuestionnaireId::new();

        let err = handler
            .handle(RecordOpenCommand {
                entity: TrackedEntity::Questionnaire(id),
            })
            .await
            .unwrap_err();

        assert_eq!(err, PortalError::QuestionnaireNotFound(id));
        assert!(events.is_empty().await);
    }
}
