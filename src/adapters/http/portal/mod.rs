//! HTTP adapter for the client portal.
//!
//! # Endpoints
//!
//! - `GET /api/portal/{client_id}/catalog` - Visible content by category
//! - `POST /api/portal/opens` - Record an open event
//! - `GET /api/portal/{client_id}/engagement` - Engagement report

pub mod handlers;
pub mod routes;

pub use routes::portal_routes;
