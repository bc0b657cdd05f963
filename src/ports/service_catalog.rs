//! Service catalog port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ServiceId};
use crate::domain::proposal::Service;

/// Shared catalog of services offered on proposals.
#[async_trait]
pub trait ServiceCatalog: Send + Sync {
    /// Services matching `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[ServiceId]) -> Result<Vec<Service>, DomainError>;

    /// All catalog services, ordered by name.
    async fn list(&self) -> Result<Vec<Service>, DomainError>;

    /// Insert or replace a service.
    async fn save(&self, service: &Service) -> Result<(), DomainError>;
}
