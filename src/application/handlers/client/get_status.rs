//! GetClientStatusHandler - Query handler for the lifecycle assessment.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::client::{
    Client, ClientError, LifecycleSignals, LifecycleStatusEngine, StatusAssessment,
};
use crate::domain::foundation::{ClientId, Timestamp};
use crate::ports::{ClientRepository, ProposalRepository};

/// A client with its stored status and the advisory suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientOverview {
    pub client: Client,
    pub assessment: StatusAssessment,
}

impl ClientOverview {
    pub(super) async fn build(
        proposals: &dyn ProposalRepository,
        engine: &LifecycleStatusEngine,
        client: Client,
        now: Timestamp,
    ) -> Result<Self, ClientError> {
        let history = proposals.list_by_client(&client.id).await?;
        let signals = LifecycleSignals::gather(&client, &history, now);
        let assessment = engine.assess(&client, &signals, now);
        Ok(Self { client, assessment })
    }
}

#[derive(Debug, Clone)]
pub struct GetClientStatusQuery {
    pub client_id: ClientId,
}

pub struct GetClientStatusHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    engine: LifecycleStatusEngine,
}

impl GetClientStatusHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        proposals: Arc<dyn ProposalRepository>,
        engine: LifecycleStatusEngine,
    ) -> Self {
        Self {
            clients,
            proposals,
            engine,
        }
    }

    pub async fn handle(&self, query: GetClientStatusQuery) -> Result<ClientOverview, ClientError> {
        let client = self
            .clients
            .find_by_id(&query.client_id)
            .await?
            .ok_or(ClientError::NotFound(query.client_id))?;

        ClientOverview::build(self.proposals.as_ref(), &self.engine, client, Timestamp::now()).await
    }
}
