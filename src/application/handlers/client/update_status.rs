//! UpdateClientStatusHandler - Operator override of the stored status.

use std::sync::Arc;

use crate::domain::client::{Client, ClientError, ClientStatus};
use crate::domain::foundation::{ClientId, Timestamp};
use crate::ports::ClientRepository;

#[derive(Debug, Clone)]
pub struct UpdateClientStatusCommand {
    pub client_id: ClientId,
    pub status: ClientStatus,
}

pub struct UpdateClientStatusHandler {
    clients: Arc<dyn ClientRepository>,
}

impl UpdateClientStatusHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, cmd: UpdateClientStatusCommand) -> Result<Client, ClientError> {
        let mut client = self
            .clients
            .find_by_id(&cmd.client_id)
            .await?
            .ok_or(ClientError::NotFound(cmd.client_id))?;

        let previous = client.stored_status;
        client.set_status(cmd.status, Timestamp::now());
        self.clients.save(&client).await?;

        tracing::info!(
            client_id = %client.id,
            from = %previous,
            to = %client.stored_status,
            "Client status set"
        );
        Ok(client)
    }
}
