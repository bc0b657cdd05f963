//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the engagement desk.

mod errors;
mod ids;
mod money;
mod percentage;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ErrorKind, ValidationError};
pub use ids::{
    ClientId, ContentItemId, OptionId, PortalId, ProposalId, QuestionId, QuestionnaireId,
    ServiceId, TemplateId,
};
pub use money::Money;
pub use percentage::Percentage;
pub use state_machine::StateMachine;
pub use timestamp::{Timestamp, MAX_VALIDITY_DAYS};
