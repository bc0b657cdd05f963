//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `pricing` - Payment terms and schedule calculation
//! - `proposal` - Proposal aggregate and services
//! - `questionnaire` - Templates, answers and the template engine
//! - `content` - Portal content and visibility
//! - `client` - Client aggregate and lifecycle status derivation
//! - `analytics` - Portal open events and engagement figures

pub mod analytics;
pub mod client;
pub mod content;
pub mod foundation;
pub mod pricing;
pub mod proposal;
pub mod questionnaire;
