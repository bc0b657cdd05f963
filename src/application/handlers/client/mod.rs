//! Client command and query handlers.

mod create_client;
mod delete_client;
mod get_status;
mod list_clients;
mod update_status;

pub use create_client::{CreateClientCommand, CreateClientHandler};
pub use delete_client::{DeleteClientCommand, DeleteClientHandler, DeletedClient};
pub use get_status::{ClientOverview, GetClientStatusHandler, GetClientStatusQuery};
pub use list_clients::{ListClientsHandler, ListClientsQuery};
pub use update_status::{UpdateClientStatusCommand, UpdateClientStatusHandler};
