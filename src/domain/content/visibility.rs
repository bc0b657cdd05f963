//! VisibilityResolver - decides which content a client's portal shows.

use serde::Serialize;

use crate::domain::foundation::ClientId;

use super::{ContentCategory, ContentItem};

/// Portal content grouped by category.
///
/// Every category is present, possibly empty. Items keep store order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortalCatalog {
    pub reports: Vec<ContentItem>,
    pub resources: Vec<ContentItem>,
    pub training: Vec<ContentItem>,
    pub links: Vec<ContentItem>,
}

impl PortalCatalog {
    fn empty() -> Self {
        Self {
            reports: Vec::new(),
            resources: Vec::new(),
            training: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn category(&self, category: ContentCategory) -> &[ContentItem] {
        match category {
            ContentCategory::Reports => &self.reports,
            ContentCategory::Resources => &self.resources,
            ContentCategory::Training => &self.training,
            ContentCategory::Links => &self.links,
        }
    }

    fn category_mut(&mut self, category: ContentCategory) -> &mut Vec<ContentItem> {
        match category {
            ContentCategory::Reports => &mut self.reports,
            ContentCategory::Resources => &mut self.resources,
            ContentCategory::Training => &mut self.training,
            ContentCategory::Links => &mut self.links,
        }
    }

    pub fn len(&self) -> usize {
        ContentCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stateless visibility filter.
pub struct VisibilityResolver;

impl VisibilityResolver {
    /// An item is visible when it is public or lists the client.
    pub fn visible_to(item: &ContentItem, client_id: &ClientId) -> bool {
        item.client_ids.is_empty() || item.client_ids.contains(client_id)
    }

    /// Visible items in store order.
    pub fn filter<'a>(
        items: impl IntoIterator<Item = &'a ContentItem>,
        client_id: &ClientId,
    ) -> Vec<&'a ContentItem> {
        items
            .into_iter()
            .filter(|item| Self::visible_to(item, client_id))
            .collect()
    }

    /// Groups the client's visible items by category.
    pub fn catalog_for(items: &[ContentItem], client_id: &ClientId) -> PortalCatalog {
        let mut catalog = PortalCatalog::empty();
        for item in Self::filter(items, client_id) {
            catalog.category_mut(item.category).push(item.clone());
        }
        catalog
    }
}
