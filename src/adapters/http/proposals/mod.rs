//! HTTP adapter for proposals.
//!
//! # Endpoints
//!
//! - `POST /api/proposals/schedule-preview` - Price terms for the editor
//! - `POST /api/proposals` - Create a proposal
//! - `POST /api/proposals/{id}/respond` - Client accepts or rejects
//! - `POST /api/proposals/{id}/checkout` - Hosted checkout for an accepted proposal

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::proposal_routes;
