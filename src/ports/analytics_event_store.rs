//! Analytics event store port.

use async_trait::async_trait;

use crate::domain::analytics::{AnalyticsEvent, TrackedEntity};
use crate::domain::foundation::DomainError;

/// Append-only sink for portal open events.
///
/// Appends are commutative; readers must not depend on event order.
#[async_trait]
pub trait AnalyticsEventStore: Send + Sync {
    /// Append one event. No deduplication.
    async fn append(&self, event: AnalyticsEvent) -> Result<(), DomainError>;

    /// Events for any of `entities`.
    async fn list_for(&self, entities: &[TrackedEntity])
        -> Result<Vec<AnalyticsEvent>, DomainError>;

    /// Remove all events of `entities`, returning how many were dropped.
    ///
    /// Only used when the owning client is deleted.
    async fn delete_for(&self, entities: &[TrackedEntity]) -> Result<usize, DomainError>;
}
