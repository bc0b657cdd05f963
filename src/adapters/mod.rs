//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory stores and catalogs
//! - `stripe` - Hosted checkout sessions
//! - `http` - Axum REST surface

pub mod http;
pub mod memory;
pub mod stripe;
