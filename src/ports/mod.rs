//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ClientRepository`, `ProposalRepository`, `QuestionnaireRepository`
//! - `TemplateCatalog`, `ServiceCatalog` - admin-authored reference data
//! - `ContentStore` - portal content metadata
//! - `AnalyticsEventStore` - append-only open events
//!
//! ## External Service Ports
//!
//! - `CheckoutSessionCreator` - hosted payment checkout

mod analytics_event_store;
mod checkout;
mod client_repository;
mod content_store;
mod proposal_repository;
mod questionnaire_repository;
mod service_catalog;
mod template_catalog;

pub use analytics_event_store::AnalyticsEventStore;
pub use checkout::{
    BillingInterval, CheckoutError, CheckoutErrorCode, CheckoutRequest, CheckoutSession,
    CheckoutSessionCreator,
};
pub use client_repository::ClientRepository;
pub use content_store::ContentStore;
pub use proposal_repository::ProposalRepository;
pub use questionnaire_repository::QuestionnaireRepository;
pub use service_catalog::ServiceCatalog;
pub use template_catalog::TemplateCatalog;
