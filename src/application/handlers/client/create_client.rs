//! CreateClientHandler - Command handler for registering a client.

use std::sync::Arc;

use crate::domain::client::{Client, ClientError, ContactDetails};
use crate::domain::foundation::{ClientId, Timestamp};
use crate::ports::ClientRepository;

/// Command to register a client.
#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    pub contact: ContactDetails,
    /// Open a portal right away.
    pub open_portal: bool,
}

pub struct CreateClientHandler {
    clients: Arc<dyn ClientRepository>,
}

impl CreateClientHandler {
    pub fn new(clients: Arc<dyn ClientRepository>) -> Self {
        Self { clients }
    }

    pub async fn handle(&self, cmd: CreateClientCommand) -> Result<Client, ClientError> {
        let now = Timestamp::now();
        let mut client = Client::register(ClientId::new(), cmd.contact, now)?;
        if cmd.open_portal {
            client.ensure_portal(now);
        }
        self.clients.save(&client).await?;

        tracing::info!(
            client_id = %client.id,
            has_portal = client.portal_id.is_some(),
            "Client registered"
        );
        Ok(client)
    }
}
