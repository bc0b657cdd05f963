//! In-memory client repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, DomainError};
use crate::ports::ClientRepository;

/// Client store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryClientRepository {
    clients: Arc<RwLock<HashMap<ClientId, Client>>>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored clients.
    pub async fn count(&self) -> usize {
        self.clients.read().await.len()
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, client: &Client) -> Result<(), DomainError> {
        self.clients.write().await.insert(client.id, client.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError> {
        Ok(self.clients.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Client>, DomainError> {
        Ok(self.clients.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: &ClientId) -> Result<bool, DomainError> {
        Ok(self.clients.write().await.remove(id).is_some())
    }
}
