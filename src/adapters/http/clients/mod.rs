//! HTTP adapter for client records.
//!
//! # Endpoints
//!
//! - `POST /api/clients` - Register a client
//! - `GET /api/clients?status=` - Roster
//! - `GET /api/clients/{id}/status` - Stored status with suggestion
//! - `PUT /api/clients/{id}/status` - Set status
//! - `DELETE /api/clients/{id}` - Cascade delete

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::client_routes;
