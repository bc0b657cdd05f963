//! HTTP adapter for questionnaires.
//!
//! # Endpoints
//!
//! - `POST /api/questionnaires` - Send a template to a client
//! - `PUT /api/questionnaires/{id}/answers` - Record typed or legacy answers
//! - `POST /api/questionnaires/{id}/submit` - Submit
//! - `GET /api/questionnaires/{id}/progress?index=N` - Step navigation state

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::questionnaire_routes;
