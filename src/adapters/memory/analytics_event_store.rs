//! In-memory analytics event log.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::analytics::{AnalyticsEvent, TrackedEntity};
use crate::domain::foundation::DomainError;
use crate::ports::AnalyticsEventStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAnalyticsEventStore {
    events: Arc<RwLock<Vec<AnalyticsEvent>>>,
}

impl InMemoryAnalyticsEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored events.
    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }
}

#[async_trait]
impl AnalyticsEventStore for InMemoryAnalyticsEventStore {
    async fn append(&self, event: AnalyticsEvent) -> Result<(), DomainError> {
        self.events.write().await.push(event);
        Ok(())
    }

    async fn list_for(
        &self,
        entities: &[TrackedEntity],
    ) -> Result<Vec<AnalyticsEvent>, DomainError> {
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|e| entities.contains(&e.entity))
            .copied()
            .collect())
    }

    async fn delete_for(&self, entities: &[TrackedEntity]) -> Result<usize, DomainError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| !entities.contains(&e.entity));
        Ok(before - events.len())
    }
}
