//! Proposal domain module.
//!
//! # Module Structure
//!
//! - `service` - catalog and proposal-scoped services
//! - `status` - ProposalStatus state machine
//! - `aggregate` - Proposal aggregate and PriceBreakdown
//! - `errors` - ProposalError

mod aggregate;
mod errors;
mod service;
mod status;

pub use aggregate::{PriceBreakdown, Proposal, ProposalDraft};
pub use errors::ProposalError;
pub use service::{CustomService, Service, MAX_SERVICE_PRICE};
pub use status::ProposalStatus;
