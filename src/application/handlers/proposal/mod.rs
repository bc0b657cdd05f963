//! Proposal command and query handlers.

mod create_proposal;
mod preview_schedule;
mod respond_to_proposal;
mod start_checkout;

pub use create_proposal::{
    CreateProposalCommand, CreateProposalHandler, CreateProposalResult, CustomServiceInput,
};
pub use preview_schedule::{PreviewScheduleHandler, PreviewScheduleQuery};
pub use respond_to_proposal::{
    ProposalDecision, RespondToProposalCommand, RespondToProposalHandler,
};
pub use start_checkout::{StartCheckoutCommand, StartCheckoutHandler};
