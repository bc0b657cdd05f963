//! Proposal aggregate entity.
//!
//! A Proposal is a priced, time-bounded offer of services to one client.
//!
//! # Design Decisions
//!
//! - **Cost is authoritative**: the operator may discount or mark up the sum
//!   of service prices; `price_breakdown` only reports the difference
//! - **Terms validated at construction**: an invalid proposal never exists
//! - **Lazy expiry**: a pending proposal past `expires_at` reads as expired
//!   without a background job

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ClientId, Money, ProposalId, ServiceId, StateMachine, Timestamp, MAX_VALIDITY_DAYS,
};
use crate::domain::pricing::{PaymentSchedule, PaymentTerms, PricingEngine};

use super::{CustomService, ProposalError, ProposalStatus, Service};

/// Operator input for a new proposal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalDraft {
    pub client_id: ClientId,
    pub title: String,
    pub selected_services: Vec<ServiceId>,
    pub custom_services: Vec<CustomService>,
    pub terms: PaymentTerms,
    pub expires_in_days: u32,
}

/// Proposal aggregate.
///
/// # Invariants
///
/// - `terms` always produce a valid payment schedule
/// - `1 <= expires_in_days <= MAX_VALIDITY_DAYS`
/// - Status transitions follow `ProposalStatus` rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,

    /// Client the proposal is addressed to.
    pub client_id: ClientId,

    pub title: String,

    /// Catalog services referenced by id.
    pub selected_services: Vec<ServiceId>,

    /// Proposal-scoped services.
    pub custom_services: Vec<CustomService>,

    /// Payment parameters; flattened so the wire shape keeps
    /// `cost`, `payment_type`, `down_payment` etc. at the top level.
    #[serde(flatten)]
    pub terms: PaymentTerms,

    pub status: ProposalStatus,

    pub expires_in_days: u32,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,

    /// When the client accepted or rejected.
    pub responded_at: Option<Timestamp>,
}

/// Advisory comparison of the quoted cost against list prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub catalog_subtotal: Money,
    pub custom_subtotal: Money,
    /// Sum of list prices for every priced line.
    pub suggested_cost: Money,
    pub cost: Money,
    /// `cost - suggested_cost`; negative means a discount.
    pub adjustment: Money,
    /// Selected ids that were not found in the catalog.
    pub unknown_services: Vec<ServiceId>,
}

impl Proposal {
    /// Creates a pending proposal after validating its terms.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` for a blank title or a validity window outside
    ///   `1..=MAX_VALIDITY_DAYS`
    /// - `InvalidTerms` if the payment terms cannot be scheduled
    pub fn create(
        id: ProposalId,
        draft: ProposalDraft,
        engine: &PricingEngine,
        now: Timestamp,
    ) -> Result<Self, ProposalError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(ProposalError::validation("title", "Title cannot be empty"));
        }
        if !(1..=MAX_VALIDITY_DAYS).contains(&draft.expires_in_days) {
            return Err(ProposalError::validation(
                "expires_in_days",
                format!("Proposal must stay open between 1 and {} days", MAX_VALIDITY_DAYS),
            ));
        }
        engine.validate(&draft.terms)?;

        Ok(Self {
            id,
            client_id: draft.client_id,
            title: title.to_string(),
            selected_services: draft.selected_services,
            custom_services: draft.custom_services,
            terms: draft.terms,
            status: ProposalStatus::Pending,
            expires_in_days: draft.expires_in_days,
            created_at: now,
            updated_at: now,
            responded_at: None,
        })
    }

    pub fn expires_at(&self) -> Timestamp {
        self.created_at.add_days(i64::from(self.expires_in_days))
    }

    /// True if still pending but past its expiry date.
    pub fn is_lapsed(&self, now: Timestamp) -> bool {
        self.status == ProposalStatus::Pending && now.is_after(&self.expires_at())
    }

    /// Status as observed at `now`, applying lazy expiry.
    pub fn effective_status(&self, now: Timestamp) -> ProposalStatus {
        if self.is_lapsed(now) {
            ProposalStatus::Expired
        } else {
            self.status
        }
    }

    /// Builds the payment schedule anchored at `start`.
    pub fn schedule(
        &self,
        engine: &PricingEngine,
        start: Timestamp,
    ) -> Result<PaymentSchedule, ProposalError> {
        Ok(engine.schedule(&self.terms, start)?)
    }

    /// Client accepts the proposal.
    ///
    /// # Errors
    ///
    /// - `Expired` if the proposal lapsed before `now`
    /// - `InvalidState` if it was already answered
    pub fn accept(&mut self, now: Timestamp) -> Result<(), ProposalError> {
        self.respond(ProposalStatus::Accepted, "accept", now)
    }

    /// Client declines the proposal.
    pub fn reject(&mut self, now: Timestamp) -> Result<(), ProposalError> {
        self.respond(ProposalStatus::Rejected, "reject", now)
    }

    /// Persists lazy expiry. Returns true if the status changed.
    pub fn expire_if_lapsed(&mut self, now: Timestamp) -> bool {
        if !self.is_lapsed(now) {
            return false;
        }
        self.status = ProposalStatus::Expired;
        self.updated_at = now;
        true
    }

    /// Compares `cost` with the list prices of the priced lines.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` when the line prices or the adjustment overflow.
    pub fn price_breakdown(&self, catalog: &[Service]) -> Result<PriceBreakdown, ProposalError> {
        let overflow = |field: &str| {
            ProposalError::validation(field, "Service prices exceed the largest representable total")
        };

        let mut catalog_prices = Vec::with_capacity(self.selected_services.len());
        let mut unknown_services = Vec::new();
        for id in &self.selected_services {
            match catalog.iter().find(|s| s.id == *id) {
                Some(service) => catalog_prices.push(service.price),
                None => unknown_services.push(*id),
            }
        }
        let catalog_subtotal =
            Money::checked_sum(catalog_prices).ok_or_else(|| overflow("selected_services"))?;
        let custom_subtotal = Money::checked_sum(self.custom_services.iter().map(|s| s.price))
            .ok_or_else(|| overflow("custom_services"))?;
        let suggested_cost = catalog_subtotal
            .checked_add(custom_subtotal)
            .ok_or_else(|| overflow("custom_services"))?;
        let adjustment = self
            .terms
            .cost
            .checked_sub(suggested_cost)
            .ok_or_else(|| overflow("cost"))?;

        Ok(PriceBreakdown {
            catalog_subtotal,
            custom_subtotal,
            suggested_cost,
            cost: self.terms.cost,
            adjustment,
            unknown_services,
        })
    }

    fn respond(
        &mut self,
        target: ProposalStatus,
        action: &str,
        now: Timestamp,
    ) -> Result<(), ProposalError> {
        if self.is_lapsed(now) {
            return Err(ProposalError::Expired(self.id));
        }
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| ProposalError::invalid_state(self.status.as_str(), action))?;
        self.responded_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}
