//! Shared application state for the HTTP surface.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryAnalyticsEventStore, InMemoryClientRepository, InMemoryContentStore,
    InMemoryProposalRepository, InMemoryQuestionnaireRepository, InMemoryServiceCatalog,
    InMemoryTemplateCatalog,
};
use crate::application::handlers::{
    CreateClientHandler, CreateProposalHandler, DeleteClientHandler, GetClientStatusHandler,
    GetEngagementHandler, GetPortalCatalogHandler, GetQuestionnaireProgressHandler,
    ListClientsHandler, PreviewScheduleHandler, RecordAnswerHandler, RecordOpenHandler,
    RespondToProposalHandler, SendQuestionnaireHandler, StartCheckoutHandler,
    SubmitQuestionnaireHandler, UpdateClientStatusHandler,
};
use crate::config::AppConfig;
use crate::domain::client::{LifecyclePolicy, LifecycleStatusEngine};
use crate::domain::pricing::{PricingEngine, PricingPolicy};
use crate::ports::{
    AnalyticsEventStore, CheckoutSessionCreator, ClientRepository, ContentStore,
    ProposalRepository, QuestionnaireRepository, ServiceCatalog, TemplateCatalog,
};

/// Domain tuning taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngagementSettings {
    pub pricing: PricingPolicy,
    pub lifecycle: LifecyclePolicy,
    pub proposal_expires_in_days: u32,
    pub questionnaire_expires_in_days: u32,
}

impl EngagementSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            pricing: config.pricing.policy(),
            lifecycle: config.lifecycle.policy(),
            proposal_expires_in_days: config.proposals.default_expires_in_days,
            questionnaire_expires_in_days: config.questionnaires.default_expires_in_days,
        }
    }
}

impl Default for EngagementSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

/// Ports shared by every request; handlers are built per request.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<dyn ClientRepository>,
    pub proposals: Arc<dyn ProposalRepository>,
    pub questionnaires: Arc<dyn QuestionnaireRepository>,
    pub templates: Arc<dyn TemplateCatalog>,
    pub services: Arc<dyn ServiceCatalog>,
    pub content: Arc<dyn ContentStore>,
    pub events: Arc<dyn AnalyticsEventStore>,
    pub checkout: Arc<dyn CheckoutSessionCreator>,
    pub settings: EngagementSettings,
}

impl AppState {
    /// State backed by fresh in-memory stores.
    pub fn in_memory(
        templates: InMemoryTemplateCatalog,
        checkout: Arc<dyn CheckoutSessionCreator>,
        settings: EngagementSettings,
    ) -> Self {
        Self {
            clients: Arc::new(InMemoryClientRepository::new()),
            proposals: Arc::new(InMemoryProposalRepository::new()),
            questionnaires: Arc::new(InMemoryQuestionnaireRepository::new()),
            templates: Arc::new(templates),
            services: Arc::new(InMemoryServiceCatalog::new()),
            content: Arc::new(InMemoryContentStore::new()),
            events: Arc::new(InMemoryAnalyticsEventStore::new()),
            checkout,
            settings,
        }
    }

    fn pricing_engine(&self) -> PricingEngine {
        PricingEngine::new(self.settings.pricing)
    }

    fn lifecycle_engine(&self) -> LifecycleStatusEngine {
        LifecycleStatusEngine::new(self.settings.lifecycle)
    }

    // Proposals

    pub fn preview_schedule_handler(&self) -> PreviewScheduleHandler {
        PreviewScheduleHandler::new(self.pricing_engine())
    }

    pub fn create_proposal_handler(&self) -> CreateProposalHandler {
        CreateProposalHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.services.clone(),
            self.pricing_engine(),
            self.settings.proposal_expires_in_days,
        )
    }

    pub fn respond_to_proposal_handler(&self) -> RespondToProposalHandler {
        RespondToProposalHandler::new(self.clients.clone(), self.proposals.clone())
    }

    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.checkout.clone(),
            self.pricing_engine(),
        )
    }

    // Questionnaires

    pub fn send_questionnaire_handler(&self) -> SendQuestionnaireHandler {
        SendQuestionnaireHandler::new(
            self.clients.clone(),
            self.questionnaires.clone(),
            self.templates.clone(),
            self.settings.questionnaire_expires_in_days,
        )
    }

    pub fn record_answer_handler(&self) -> RecordAnswerHandler {
        RecordAnswerHandler::new(
            self.clients.clone(),
            self.questionnaires.clone(),
            self.templates.clone(),
        )
    }

    pub fn submit_questionnaire_handler(&self) -> SubmitQuestionnaireHandler {
        SubmitQuestionnaireHandler::new(
            self.clients.clone(),
            self.questionnaires.clone(),
            self.templates.clone(),
        )
    }

    pub fn progress_handler(&self) -> GetQuestionnaireProgressHandler {
        GetQuestionnaireProgressHandler::new(self.questionnaires.clone(), self.templates.clone())
    }

    // Portal

    pub fn portal_catalog_handler(&self) -> GetPortalCatalogHandler {
        GetPortalCatalogHandler::new(self.clients.clone(), self.content.clone())
    }

    pub fn record_open_handler(&self) -> RecordOpenHandler {
        RecordOpenHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.questionnaires.clone(),
            self.events.clone(),
        )
    }

    pub fn engagement_handler(&self) -> GetEngagementHandler {
        GetEngagementHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.questionnaires.clone(),
            self.events.clone(),
        )
    }

    // Clients

    pub fn create_client_handler(&self) -> CreateClientHandler {
        CreateClientHandler::new(self.clients.clone())
    }

    pub fn update_client_status_handler(&self) -> UpdateClientStatusHandler {
        UpdateClientStatusHandler::new(self.clients.clone())
    }

    pub fn client_status_handler(&self) -> GetClientStatusHandler {
        GetClientStatusHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.lifecycle_engine(),
        )
    }

    pub fn list_clients_handler(&self) -> ListClientsHandler {
        ListClientsHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.lifecycle_engine(),
        )
    }

    pub fn delete_client_handler(&self) -> DeleteClientHandler {
        DeleteClientHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            self.questionnaires.clone(),
            self.events.clone(),
            self.content.clone(),
        )
    }
}
