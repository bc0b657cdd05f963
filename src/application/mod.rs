//! Application layer - Commands, Queries, and Handlers.
//!
//! Orchestrates domain operations and coordinates between ports. Command
//! handlers write through repositories; query handlers only read.

pub mod handlers;

pub use handlers::*;
