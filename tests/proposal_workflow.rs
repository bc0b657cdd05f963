//! Integration tests for the proposal lifecycle.
//!
//! Drives the application handlers against the in-memory adapters:
//! create -> accept -> checkout, plus the rejection paths.

use std::sync::Arc;

use engagement_desk::adapters::memory::{
    InMemoryClientRepository, InMemoryProposalRepository, InMemoryServiceCatalog,
};
use engagement_desk::adapters::stripe::MockCheckoutSessionCreator;
use engagement_desk::application::handlers::{
    CreateClientCommand, CreateClientHandler, CreateProposalCommand, CreateProposalHandler,
    CustomServiceInput, ProposalDecision, RespondToProposalCommand, RespondToProposalHandler,
    StartCheckoutCommand, StartCheckoutHandler,
};
use engagement_desk::domain::client::{Client, ContactDetails};
use engagement_desk::domain::foundation::Money;
use engagement_desk::domain::pricing::{PaymentTerms, PricingEngine};
use engagement_desk::domain::proposal::{Proposal, ProposalError, ProposalStatus, Service};
use engagement_desk::ports::{BillingInterval, CheckoutError, ProposalRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Desk {
    clients: Arc<InMemoryClientRepository>,
    proposals: Arc<InMemoryProposalRepository>,
    checkout: MockCheckoutSessionCreator,
    seo_audit: Service,
}

impl Desk {
    fn new() -> Self {
        let seo_audit = Service::new(
            "SEO audit",
            Money::from_cents(50_000),
            vec!["Keyword research".to_string()],
        )
        .unwrap();
        Self {
            clients: Arc::new(InMemoryClientRepository::new()),
            proposals: Arc::new(InMemoryProposalRepository::new()),
            checkout: MockCheckoutSessionCreator::new(),
            seo_audit,
        }
    }

    fn create_handler(&self) -> CreateProposalHandler {
        CreateProposalHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            Arc::new(InMemoryServiceCatalog::with_services([self.seo_audit.clone()])),
            PricingEngine::default(),
            30,
        )
    }

    fn respond_handler(&self) -> RespondToProposalHandler {
        RespondToProposalHandler::new(self.clients.clone(), self.proposals.clone())
    }

    fn checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(
            self.clients.clone(),
            self.proposals.clone(),
            Arc::new(self.checkout.clone()),
            PricingEngine::default(),
        )
    }

    async fn client(&self) -> Client {
        CreateClientHandler::new(self.clients.clone())
            .handle(CreateClientCommand {
                contact: ContactDetails {
                    name: "Grace Hopper".to_string(),
                    email: "grace@navy.example".to_string(),
                    company: Some("Navy".to_string()),
                    phone: None,
                },
                open_portal: true,
            })
            .await
            .unwrap()
    }

    async fn proposal(&self, client: &Client, terms: PaymentTerms) -> Proposal {
        self.create_handler()
            .handle(CreateProposalCommand {
                client_id: client.id,
                title: "Growth package".to_string(),
                selected_services: vec![self.seo_audit.id],
                custom_services: vec![CustomServiceInput {
                    name: "Landing page".to_string(),
                    description: None,
                    price: Money::from_cents(100_000),
                    features: vec![],
                }],
                terms,
                expires_in_days: None,
            })
            .await
            .unwrap()
            .proposal
    }

    async fn respond(
        &self,
        proposal: &Proposal,
        decision: ProposalDecision,
    ) -> Result<Proposal, ProposalError> {
        self.respond_handler()
            .handle(RespondToProposalCommand {
                proposal_id: proposal.id,
                decision,
            })
            .await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn create_prices_catalog_and_custom_lines() {
    let desk = Desk::new();
    let client = desk.client().await;

    let result = desk
        .create_handler()
        .handle(CreateProposalCommand {
            client_id: client.id,
            title: "Growth package".to_string(),
            selected_services: vec![desk.seo_audit.id],
            custom_services: vec![CustomServiceInput {
                name: "Landing page".to_string(),
                description: Some("One page".to_string()),
                price: Money::from_cents(100_000),
                features: vec![],
            }],
            terms: PaymentTerms::installments(Money::from_cents(150_000), 3),
            expires_in_days: Some(10),
        })
        .await
        .unwrap();

    assert_eq!(result.proposal.status, ProposalStatus::Pending);
    assert_eq!(result.proposal.expires_in_days, 10);
    assert_eq!(result.price_breakdown.suggested_cost, Money::from_cents(150_000));
    assert_eq!(result.price_breakdown.adjustment, Money::ZERO);
    assert_eq!(
        result.schedule.amounts(),
        vec![Money::from_cents(50_000); 3]
    );
    assert_eq!(result.schedule.total(), Money::from_cents(150_000));
}

#[tokio::test]
async fn accepted_recurring_proposal_opens_subscription_checkout() {
    let desk = Desk::new();
    let client = desk.client().await;
    let proposal = desk
        .proposal(
            &client,
            PaymentTerms::installments(Money::from_cents(150_000), 3).recurring(),
        )
        .await;

    let accepted = desk.respond(&proposal, ProposalDecision::Accept).await.unwrap();
    assert_eq!(accepted.status, ProposalStatus::Accepted);
    assert!(accepted.responded_at.is_some());

    desk.checkout_handler()
        .handle(StartCheckoutCommand {
            proposal_id: proposal.id,
        })
        .await
        .unwrap();

    let requests = desk.checkout.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.amount, Money::from_cents(50_000));
    assert!(request.is_subscription);
    assert_eq!(request.subscription_interval, Some(BillingInterval::Month));
    assert_eq!(request.client_reference, proposal.id.to_string());
    assert_eq!(request.customer_email, "grace@navy.example");
}

#[tokio::test]
async fn one_off_payment_is_not_a_subscription() {
    let desk = Desk::new();
    let client = desk.client().await;
    let proposal = desk
        .proposal(&client, PaymentTerms::full(Money::from_cents(150_000)))
        .await;
    desk.respond(&proposal, ProposalDecision::Accept).await.unwrap();

    desk.checkout_handler()
        .handle(StartCheckoutCommand {
            proposal_id: proposal.id,
        })
        .await
        .unwrap();

    let request = &desk.checkout.requests()[0];
    assert_eq!(request.amount, Money::from_cents(150_000));
    assert!(!request.is_subscription);
    assert_eq!(request.subscription_interval, None);
}

#[tokio::test]
async fn rejected_proposal_cannot_be_answered_again_or_paid() {
    let desk = Desk::new();
    let client = desk.client().await;
    let proposal = desk
        .proposal(&client, PaymentTerms::full(Money::from_cents(150_000)))
        .await;

    desk.respond(&proposal, ProposalDecision::Reject).await.unwrap();

    let again = desk.respond(&proposal, ProposalDecision::Accept).await;
    assert!(matches!(again, Err(ProposalError::InvalidState { .. })));

    let checkout = desk
        .checkout_handler()
        .handle(StartCheckoutCommand {
            proposal_id: proposal.id,
        })
        .await;
    assert!(matches!(checkout, Err(ProposalError::InvalidState { .. })));
    assert_eq!(desk.checkout.call_count(), 0);
}

#[tokio::test]
async fn gateway_failure_leaves_proposal_accepted() {
    let desk = Desk::new();
    let client = desk.client().await;
    let proposal = desk
        .proposal(&client, PaymentTerms::full(Money::from_cents(150_000)))
        .await;
    desk.respond(&proposal, ProposalDecision::Accept).await.unwrap();
    desk.checkout.set_error(CheckoutError::network("timed out"));

    let err = desk
        .checkout_handler()
        .handle(StartCheckoutCommand {
            proposal_id: proposal.id,
        })
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ProposalError::CheckoutFailed {
            reason: "timed out".to_string(),
            retryable: true,
        }
    );
    let stored = desk.proposals.find_by_id(&proposal.id).await.unwrap().unwrap();
    assert_eq!(stored.status, ProposalStatus::Accepted);
}
