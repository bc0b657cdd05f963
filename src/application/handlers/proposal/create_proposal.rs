//! CreateProposalHandler - Command handler for issuing a proposal.

use std::sync::Arc;

use crate::domain::foundation::{ClientId, Money, ProposalId, ServiceId, Timestamp};
use crate::domain::pricing::{PaymentSchedule, PaymentTerms, PricingEngine};
use crate::domain::proposal::{
    CustomService, PriceBreakdown, Proposal, ProposalDraft, ProposalError,
};
use crate::ports::{ClientRepository, ProposalRepository, ServiceCatalog};

/// Ad-hoc service line supplied with the command.
#[derive(Debug, Clone)]
pub struct CustomServiceInput {
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub features: Vec<String>,
}

/// Command to create a proposal.
#[derive(Debug, Clone)]
pub struct CreateProposalCommand {
    pub client_id: ClientId,
    pub title: String,
    pub selected_services: Vec<ServiceId>,
    pub custom_services: Vec<CustomServiceInput>,
    pub terms: PaymentTerms,
    /// Falls back to the configured default.
    pub expires_in_days: Option<u32>,
}

/// Result of proposal creation.
#[derive(Debug, Clone)]
pub struct CreateProposalResult {
    pub proposal: Proposal,
    /// Schedule as it would run if accepted now.
    pub schedule: PaymentSchedule,
    pub price_breakdown: PriceBreakdown,
}

/// Handler for creating proposals.
pub struct CreateProposalHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    services: Arc<dyn ServiceCatalog>,
    engine: PricingEngine,
    default_expires_in_days: u32,
}

impl CreateProposalHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        proposals: Arc<dyn ProposalRepository>,
        services: Arc<dyn ServiceCatalog>,
        engine: PricingEngine,
        default_expires_in_days: u32,
    ) -> Self {
        Self {
            clients,
            proposals,
            services,
            engine,
            default_expires_in_days,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateProposalCommand,
    ) -> Result<CreateProposalResult, ProposalError> {
        // 1. Client must exist
        if self.clients.find_by_id(&cmd.client_id).await?.is_none() {
            return Err(ProposalError::ClientNotFound(cmd.client_id));
        }

        // 2. Every selected service must be in the catalog
        let catalog = self.services.find_by_ids(&cmd.selected_services).await?;
        if let Some(missing) = cmd
            .selected_services
            .iter()
            .find(|id| !catalog.iter().any(|s| s.id == **id))
        {
            return Err(ProposalError::validation(
                "selected_services",
                format!("Unknown service: {}", missing),
            ));
        }

        // 3. Build custom service lines
        let mut custom_services = Vec::with_capacity(cmd.custom_services.len());
        for input in cmd.custom_services {
            let mut service = CustomService::new(input.name, input.price, input.features)?;
            service.description = input.description;
            custom_services.push(service);
        }

        // 4. Create and persist
        let now = Timestamp::now();
        let proposal = Proposal::create(
            ProposalId::new(),
            ProposalDraft {
                client_id: cmd.client_id,
                title: cmd.title,
                selected_services: cmd.selected_services,
                custom_services,
                terms: cmd.terms,
                expires_in_days: cmd.expires_in_days.unwrap_or(self.default_expires_in_days),
            },
            &self.engine,
            now,
        )?;
        let price_breakdown = proposal.price_breakdown(&catalog)?;
        self.proposals.save(&proposal).await?;

        let schedule = proposal.schedule(&self.engine, now)?;

        tracing::info!(
            proposal_id = %proposal.id,
            client_id = %proposal.client_id,
            cost = %proposal.terms.cost,
            payment_type = %proposal.terms.payment_type,
            "Proposal created"
        );

        Ok(CreateProposalResult {
            proposal,
            schedule,
            price_breakdown,
        })
    }
}
