//! Portal content items.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClientId, ContentItemId, Timestamp, ValidationError};

/// Portal section a content item is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Reports,
    Resources,
    Training,
    Links,
}

impl ContentCategory {
    /// All categories in portal display order.
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Reports,
        ContentCategory::Resources,
        ContentCategory::Training,
        ContentCategory::Links,
    ];
}

/// How the item is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Link,
    File,
    Video,
}

/// A resource shown in client portals.
///
/// An empty `client_ids` set makes the item visible to every client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ContentItemId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    pub category: ContentCategory,
    pub content_type: ContentType,
    #[serde(default)]
    pub client_ids: BTreeSet<ClientId>,
    pub created_at: Timestamp,
}

impl ContentItem {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        category: ContentCategory,
        content_type: ContentType,
        now: Timestamp,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        let url = url.into();
        if url.trim().is_empty() {
            return Err(ValidationError::empty_field("url"));
        }
        Ok(Self {
            id: ContentItemId::new(),
            title,
            description: None,
            url,
            category,
            content_type,
            client_ids: BTreeSet::new(),
            created_at: now,
        })
    }

    /// Restricts the item to the given clients.
    pub fn restricted_to(mut self, clients: impl IntoIterator<Item = ClientId>) -> Self {
        self.client_ids = clients.into_iter().collect();
        self
    }

    pub fn is_public(&self) -> bool {
        self.client_ids.is_empty()
    }

    /// Drops a deleted client from the audience.
    ///
    /// Returns true if the item was restricted to that client alone, in
    /// which case the caller should delete it rather than let it become
    /// public.
    pub fn forget_client(&mut self, client_id: &ClientId) -> bool {
        let removed = self.client_ids.remove(client_id);
        removed && self.client_ids.is_empty()
    }
}
