//! StartCheckoutHandler - Command handler for opening a hosted checkout.
//!
//! Charges the first positive scheduled payment. A recurring schedule turns
//! the session into a monthly subscription. Gateway failures are returned to
//! the caller and leave the proposal untouched.

use std::sync::Arc;

use crate::domain::foundation::{ProposalId, Timestamp};
use crate::domain::pricing::PricingEngine;
use crate::domain::proposal::{ProposalError, ProposalStatus};
use crate::ports::{
    BillingInterval, CheckoutRequest, CheckoutSession, CheckoutSessionCreator, ClientRepository,
    ProposalRepository,
};

/// Command to start checkout for an accepted proposal.
#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub proposal_id: ProposalId,
}

/// Handler for checkout sessions.
pub struct StartCheckoutHandler {
    clients: Arc<dyn ClientRepository>,
    proposals: Arc<dyn ProposalRepository>,
    checkout: Arc<dyn CheckoutSessionCreator>,
    engine: PricingEngine,
}

impl StartCheckoutHandler {
    pub fn new(
        clients: Arc<dyn ClientRepository>,
        proposals: Arc<dyn ProposalRepository>,
        checkout: Arc<dyn CheckoutSessionCreator>,
        engine: PricingEngine,
    ) -> Self {
        Self {
            clients,
            proposals,
            checkout,
            engine,
        }
    }

    pub async fn handle(&self, cmd: StartCheckoutCommand) -> Result<CheckoutSession, ProposalError> {
        let proposal = self
            .proposals
            .find_by_id(&cmd.proposal_id)
            .await?
            .ok_or(ProposalError::NotFound(cmd.proposal_id))?;

        if proposal.status != ProposalStatus::Accepted {
            return Err(ProposalError::invalid_state(
                proposal.status.as_str(),
                "checkout",
            ));
        }

        let client = self
            .clients
            .find_by_id(&proposal.client_id)
            .await?
            .ok_or(ProposalError::ClientNotFound(proposal.client_id))?;

        let start = proposal.responded_at.unwrap_or_else(Timestamp::now);
        let schedule = proposal.schedule(&self.engine, start)?;
        let first = schedule
            .entries()
            .iter()
            .find(|entry| entry.amount.is_positive())
            .ok_or_else(|| ProposalError::validation("cost", "Nothing is due on this proposal"))?;

        let is_subscription = schedule.recurrence().is_recurring();
        let request = CheckoutRequest {
            amount: first.amount,
            description: proposal.title.clone(),
            customer_email: client.email.clone(),
            is_subscription,
            subscription_interval: is_subscription.then_some(BillingInterval::Month),
            client_reference: proposal.id.to_string(),
        };

        match self.checkout.create_checkout_session(request).await {
            Ok(session) => {
                tracing::info!(
                    proposal_id = %proposal.id,
                    session_id = %session.id,
                    amount = %first.amount,
                    is_subscription,
                    "Checkout session created"
                );
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(
                    proposal_id = %proposal.id,
                    code = ?err.code,
                    retryable = err.retryable,
                    error = %err.message,
                    "Checkout session failed"
                );
                Err(ProposalError::CheckoutFailed {
                    reason: err.message,
                    retryable: err.retryable,
                })
            }
        }
    }
}
