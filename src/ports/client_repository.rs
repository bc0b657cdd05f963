//! Client repository port.

use async_trait::async_trait;

use crate::domain::client::Client;
use crate::domain::foundation::{ClientId, DomainError};

/// Repository port for Client aggregate persistence.
///
/// Saves are upserts; the last write wins.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert or replace a client.
    async fn save(&self, client: &Client) -> Result<(), DomainError>;

    /// Find a client by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ClientId) -> Result<Option<Client>, DomainError>;

    /// All clients, in no particular order.
    async fn list(&self) -> Result<Vec<Client>, DomainError>;

    /// Delete a client. Returns false if it did not exist.
    async fn delete(&self, id: &ClientId) -> Result<bool, DomainError>;
}
