//! Portal content store port.

use async_trait::async_trait;

use crate::domain::content::ContentItem;
use crate::domain::foundation::{ContentItemId, DomainError};

/// Storage for portal content metadata. File bytes live elsewhere.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All items in store order (oldest first).
    async fn list(&self) -> Result<Vec<ContentItem>, DomainError>;

    async fn find_by_id(&self, id: &ContentItemId) -> Result<Option<ContentItem>, DomainError>;

    /// Insert or replace an item, keeping its store position.
    async fn save(&self, item: &ContentItem) -> Result<(), DomainError>;

    /// Returns false if the item did not exist.
    async fn delete(&self, id: &ContentItemId) -> Result<bool, DomainError>;
}
