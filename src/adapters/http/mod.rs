//! HTTP adapters - REST API implementations.
//!
//! Each module has its own sub-router; `router` nests them under `/api`.

pub mod clients;
pub mod error;
pub mod portal;
pub mod proposals;
pub mod questionnaires;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorBody, ErrorResponse};
pub use router::{api_router, build_router};
pub use state::{AppState, EngagementSettings};
