//! Engagement Desk - client-engagement back office.
//!
//! Agencies issue priced proposals, send onboarding questionnaires, publish
//! portal content and track how clients engage with all of it.
//!
//! Layers follow a hexagonal layout: `domain` holds the rules, `ports`
//! the storage and payment contracts, `adapters` their implementations
//! and the HTTP surface, `application` the command and query handlers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
