//! In-memory service catalog.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::proposal::Service;
use crate::ports::ServiceCatalog;

#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceCatalog {
    services: Arc<RwLock<HashMap<ServiceId, Service>>>,
}

impl InMemoryServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with `services`.
    pub fn with_services(services: impl IntoIterator<Item = Service>) -> Self {
        let map = services.into_iter().map(|s| (s.id, s)).collect();
        Self {
            services: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl ServiceCatalog for InMemoryServiceCatalog {
    async fn find_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, DomainError> {
        let services = self.services.read().await;
        Ok(ids.iter().filter_map(|id| services.get(id).cloned()).collect())
    }

    async fn list(&self) -> Result<Vec<Service>, DomainError> {
        let mut services: Vec<Service> = self.services.read().await.values().cloned().collect();
        services.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(services)
    }

    async fn save(&self, service: &Service) -> Result<(), DomainError> {
        self.services
            .write()
            .await
            .insert(service.id, service.clone());
        Ok(())
    }
}
