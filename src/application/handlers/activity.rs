//! Client activity bookkeeping shared by handlers.

use crate::domain::foundation::{ClientId, DomainError, Timestamp};
use crate::ports::ClientRepository;

/// Bumps `last_activity` on the client. A missing client is ignored.
pub(crate) async fn touch_client(
    clients: &dyn ClientRepository,
    client_id: &ClientId,
    at: Timestamp,
) -> Result<(), DomainError> {
    if let Some(mut client) = clients.find_by_id(client_id).await? {
        client.touch_activity(at);
        clients.save(&client).await?;
    }
    Ok(())
}
