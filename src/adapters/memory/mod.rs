//! In-memory storage adapters.
//!
//! Every persistence port has an in-memory implementation guarded by a
//! `tokio::sync::RwLock`. They back the development server and all tests.
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::memory::{InMemoryClientRepository, InMemoryTemplateCatalog};
//!
//! let clients = InMemoryClientRepository::new();
//! let templates = InMemoryTemplateCatalog::from_yaml_file("templates.yaml").await?;
//! ```

mod analytics_event_store;
mod client_repository;
mod content_store;
mod proposal_repository;
mod questionnaire_repository;
mod service_catalog;
mod template_catalog;

pub use analytics_event_store::InMemoryAnalyticsEventStore;
pub use client_repository::InMemoryClientRepository;
pub use content_store::InMemoryContentStore;
pub use proposal_repository::InMemoryProposalRepository;
pub use questionnaire_repository::InMemoryQuestionnaireRepository;
pub use service_catalog::InMemoryServiceCatalog;
pub use template_catalog::{parse_template_seed, InMemoryTemplateCatalog, TemplateSeedError};
