//! In-memory proposal repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{ClientId, DomainError, ProposalId};
use crate::domain::proposal::Proposal;
use crate::ports::ProposalRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryProposalRepository {
    proposals: Arc<RwLock<HashMap<ProposalId, Proposal>>>,
}

impl InMemoryProposalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.proposals.read().await.len()
    }
}

#[async_trait]
impl ProposalRepository for InMemoryProposalRepository {
    async fn save(&self, proposal: &Proposal) -> Result<(), DomainError> {
        self.proposals
            .write()
            .await
            .insert(proposal.id, proposal.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, DomainError> {
        Ok(self.proposals.read().await.get(id).cloned())
    }

    async fn list_by_client(&self, client_id: &ClientId) -> Result<Vec<Proposal>, DomainError> {
        let mut proposals: Vec<Proposal> = self
            .proposals
            .read()
            .await
            .values()
            .filter(|p| p.client_id == *client_id)
            .cloned()
            .collect();
        proposals.sort_by_key(|p| p.created_at);
        Ok(proposals)
    }

    async fn delete_by_client(
        &self,
        client_id: &ClientId,
    ) -> Result<Vec<ProposalId>, DomainError> {
        let mut proposals = self.proposals.write().await;
        let ids: Vec<ProposalId> = proposals
            .values()
            .filter(|p| p.client_id == *client_id)
            .map(|p| p.id)
            .collect();
        for id in &ids {
            proposals.remove(id);
        }
        Ok(ids)
    }
}
