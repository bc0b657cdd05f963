//! Proposal repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ClientId, DomainError, ProposalId};
use crate::domain::proposal::Proposal;

/// Repository port for Proposal aggregate persistence.
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Insert or replace a proposal.
    async fn save(&self, proposal: &Proposal) -> Result<(), DomainError>;

    /// Find a proposal by its ID.
    async fn find_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, DomainError>;

    /// Proposals addressed to a client, oldest first.
    async fn list_by_client(&self, client_id: &ClientId) -> Result<Vec<Proposal>, DomainError>;

    /// Delete every proposal of a client, returning the removed ids.
    async fn delete_by_client(&self, client_id: &ClientId)
        -> Result<Vec<ProposalId>, DomainError>;
}
