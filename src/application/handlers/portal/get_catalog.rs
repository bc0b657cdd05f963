//! GetPortalCatalogHandler - Query handler for a client's portal content.

use std::sync::Arc;

use crate::domain::content::{PortalCatalog, PortalError, VisibilityResolver};
use crate::domain::foundation::ClientId;
use crate::ports::{ClientRepository, ContentStore};

/// Query for the content a client may see.
#[derive(Debug, Clone)]
pub struct GetPortalCatalogQuery {
    pub client_id: ClientId,
}

pub struct GetPortalCatalogHandler {
    clients: Arc<dyn ClientRepository>,
    content: Arc<dyn ContentStore>,
}

impl GetPortalCatalogHandler {
    pub fn new(clients: Arc<dyn ClientRepository>, content: Arc<dyn ContentStore>) -> Self {
        Self { clients, content }
    }

    pub async fn handle(&self, query: GetPortalCatalogQuery) -> Result<PortalCatalog, PortalError> {
        if self.clients.find_by_id(&query.client_id).await?.is_none() {
            return Err(PortalError::ClientNotFound(query.client_id));
        }

        let items = self.content.list().await?;
        let catalog = VisibilityResolver::catalog_for(&items, &query.client_id);

        tracing::debug!(
            client_id = %query.client_id,
            visible = catalog.len(),
            total = items.len(),
            "Portal catalog resolved"
        );

        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryClientRepository, InMemoryContentStore};
    use crate::application::handlers::test_support::stored_client;
    use crate::domain::content::{ContentCategory, ContentItem, ContentType};
    use crate::domain::foundation::Timestamp;

    fn item(title: &str, category: ContentCategory) -> ContentItem {
        ContentItem::new(
            title,
            format!("https://example.com/{}", title),
            category,
            ContentType::Link,
            Timestamp::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn shows_public_and_own_items_only() {
        let clients = Arc::new(InMemoryClientRepository::new());
        let content = Arc::new(InMemoryContentStore::new());
        let ada = stored_client(&clients, "Ada").await;
        let bob = stored_client(&clients, "Bob").await;
        content.save(&item("guide", ContentCategory::Resources)).await.unwrap();
        content
            .save(&item("ada-report", ContentCategory::Reports).restricted_to([ada.id]))
            .await
            .unwrap();
        content
            .save(&item("bob-report", ContentCategory::Reports).restricted_to([bob.id]))
            .await
            .unwrap();
        let handler = GetPortalCatalogHandler::new(clients, content);

        let catalog = handler
            .handle(GetPortalCatalogQuery { client_id: ada.id })
            .await
            .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.reports.len(), 1);
        assert_eq!(catalog.reports[0].title, "ada-report");
        assert_eq!(catalog.resources[0].title, "guide");
        assert!(catalog.training.is_empty());
    }

    #[tokio::test]
    async fn unknown_client_is_not_found() {
        let handler = GetPortalCatalogHandler::new(
            Arc::new(InMemoryClientRepository::new()),
            Arc::new(InMemoryContentStore::new()),
        );
        let client_id = ClientId::new();
        let err = handler
            .handle(GetPortalCatalogQuery { client_id })
            .await
            .unwrap_err();
        assert_eq!(err, PortalError::ClientNotFound(client_id));
    }
}
