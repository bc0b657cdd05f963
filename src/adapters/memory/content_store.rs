//! In-memory content store.
//!
//! Items live in a `Vec` so listing preserves insertion order, which is
//! the order portals display within a category.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::content::ContentItem;
use crate::domain::foundation::{ContentItemId, DomainError};
use crate::ports::ContentStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryContentStore {
    items: Arc<RwLock<Vec<ContentItem>>>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list(&self) -> Result<Vec<ContentItem>, DomainError> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_id(&self, id: &ContentItemId) -> Result<Option<ContentItem>, DomainError> {
        Ok(self.items.read().await.iter().find(|i| i.id == *id).cloned())
    }

    async fn save(&self, item: &ContentItem) -> Result<(), DomainError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => *existing = item.clone(),
            None => items.push(item.clone()),
        }
        Ok(())
    }

    async fn delete(&self, id: &ContentItemId) -> Result<bool, DomainError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|i| i.id != *id);
        Ok(items.len() != before)
    }
}
