//! DeleteClientHandler - Command handler for removing a client and its data.
//!
//! # Cascade
//!
//! 1. open events for the client's proposals and questionnaire instances,
//!    while those entities still exist to name them
//! 2. the proposals and questionnaire instances
//! 3. content audiences: the client is dropped from every item, and items
//!    that were restricted to that client alone are deleted
//! 4. the client record itself
//!
//! Each step only removes what it finds, so rerunning after a failure
//! finishes the cascade without leaving orphaned events.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::analytics::TrackedEntity;
use crate::domain::client::ClientError;
use crate::domain::foundation::ClientId;
use crate::ports::{
    AnalyticsEventStore, ClientRepository, ContentStore, ProposalRepository,
    QuestionnaireRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub client_id: ClientId,
}

/// What the cascade removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletedClient {
    pub client_id: ClientId,
    pub proposals: usize,
    pub questionnaires: usize,
    pub events: usize,
    pub content_items_deleted: usize,
    pub content_items_updated: usize,
}

pub struct DeleteClientHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    questionnaires: Arc<dyn QuestionnaireRepository>,
    events: Arc<dyn AnalyticsEventStore>,
    content: Arc<dyn ContentStore>,
}

impl DeleteClientHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        proposals: Arc<dyn ProposalRepository>,
        questionnaires: Arc<dyn QuestionnaireRepository>,
        events: Arc<dyn AnalyticsEventStore>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            clients,
            proposals,
            questionnaires,
            events,
            content,
        }
    }

    pub async fn handle(&self, cmd: DeleteClientCommand) -> Result<DeletedClient, ClientError> {
        let client_id = cmd.client_id;
        if self.clients.find_by_id(&client_id).await?.is_none() {
            return Err(ClientError::NotFound(client_id));
        }

        let tracked: Vec<TrackedEntity> = self
            .proposals
            .list_by_client(&client_id)
            .await?
            .iter()
            .map(|p| TrackedEntity::Proposal(p.id))
            .chain(
                self.questionnaires
                    .list_by_client(&client_id)
                    .await?
                    .iter()
                    .map(|q| TrackedEntity::Questionnaire(q.id)),
            )
            .collect();
        let events = self.events.delete_for(&tracked).await?;

        let proposal_ids = self.proposals.delete_by_client(&client_id).await?;
        let questionnaire_ids = self.questionnaires.delete_by_client(&client_id).await?;

        let mut report = DeletedClient {
            client_id,
            proposals: proposal_ids.len(),
            questionnaires: questionnaire_ids.len(),
            events,
            ..Default::default()
        };

        for mut item in self.content.list().await? {
            if !item.client_ids.contains(&client_id) {
                continue;
            }
            if item.forget_client(&client_id) {
                self.content.delete(&item.id).await?;
                report.content_items_deleted += 1;
            } else {
                self.content.save(&item).await?;
                report.content_items_updated += 1;
            }
        }

        self.clients.delete(&client_id).await?;

        tracing::info!(
            client_id = %client_id,
            proposals = report.proposals,
            questionnaires = report.questionnaires,
            events = report.events,
            content_deleted = report.content_items_deleted,
            "Client deleted"
        );
        Ok(report)
    }
}
