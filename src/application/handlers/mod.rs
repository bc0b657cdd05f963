//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations, grouped
//! by the module they serve.

mod activity;
pub mod client;
pub mod portal;
pub mod proposal;
pub mod questionnaire;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{
    ClientOverview, CreateClientCommand, CreateClientHandler, DeleteClientCommand,
    DeleteClientHandler, DeletedClient, GetClientStatusHandler, GetClientStatusQuery,
    ListClientsHandler, ListClientsQuery, UpdateClientStatusCommand, UpdateClientStatusHandler,
};
pub use portal::{
    GetEngagementHandler, GetEngagementQuery, GetPortalCatalogHandler, GetPortalCatalogQuery,
    RecordOpenCommand, RecordOpenHandler,
};
pub use proposal::{
    CreateProposalCommand, CreateProposalHandler, CreateProposalResult, CustomServiceInput,
    PreviewScheduleHandler, PreviewScheduleQuery, ProposalDecision, RespondToProposalCommand,
    RespondToProposalHandler, StartCheckoutCommand, StartCheckoutHandler,
};
pub use questionnaire::{
    AnswerInput, GetQuestionnaireProgressHandler, GetQuestionnaireProgressQuery,
    QuestionnaireProgress, RecordAnswerCommand, RecordAnswerHandler, SendQuestionnaireCommand,
    SendQuestionnaireHandler, SubmitQuestionnaireCommand, SubmitQuestionnaireHandler,
};
