//! ListClientsHandler - Query handler for the client roster.

use std::sync::Arc;

use crate::domain::client::{filter_and_sort, ClientError, ClientStatus, LifecycleStatusEngine};
use crate::domain::foundation::Timestamp;
use crate::ports::{ClientRepository, ProposalRepository};

use super::ClientOverview;

/// Roster query; `status` filters on the stored status.
#[derive(Debug, Clone, Default)]
pub struct ListClientsQuery {
    pub status: Option<ClientStatus>,
}

pub struct ListClientsHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    engine: LifecycleStatusEngine,
}

impl ListClientsHandler {
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

    pub async fn handle(&self, query: ListClientsQuery) -> Result<Vec<ClientOverview>, ClientError> {
        let roster = filter_and_sort(self.clients.list().await?, query.status);
        let now = Timestamp::now();

        let mut overviews = Vec::with_capacity(roster.len());
        for client in roster {
            overviews
                .push(ClientOverview::build(self.proposals.as_ref(), &self.engine, client, now).await?);
        }

        tracing::debug!(count = overviews.len(), status = ?query.status, "Client roster listed");
        Ok(overviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientRepository, InMemoryProposalRepository};
    use crate::application::handlers::test_support::stored_client;

    async fn roster() -> ListClientsHandler {
        let clients = Arc::new(InMemoryClientRepository::new());
        stored_client(&clients, "zed").await;
        stored_client(&clients, "Amy").await;
        let mut churned = stored_client(&clients, "Bea").await;
        churned.set_status(ClientStatus::Churned, Timestamp::now());
        clients.save(&churned).await.unwrap();
        ListClientsHandler::new(
            clients,
            Arc::new(InMemoryProposalRepository::new()),
            LifecycleStatusEngine::default(),
        )
    }

    #[tokio::test]
    async fn orders_by_status_then_name() {
        let handler = roster().await;

        let names: Vec<String> = handler
            .handle(ListClientsQuery::default())
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.client.name)
            .collect();

        assert_eq!(names, vec!["Amy", "zed", "Bea"]);
    }

    #[tokio::test]
    async fn filters_on_stored_status() {
        let handler = roster().await;

        let churned = handler
            .handle(ListClientsQuery {
                status: Some(ClientStatus::Churned),
            })
            .await
            .unwrap();

        assert_eq!(churned.len(), 1);
        assert_eq!(churned[0].client.name, "Bea");
    }
}
