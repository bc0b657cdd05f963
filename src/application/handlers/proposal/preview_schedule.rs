//! PreviewScheduleHandler - Query handler for pricing a set of terms.

use crate::domain::foundation::Timestamp;
use crate::domain::pricing::{PaymentSchedule, PaymentTerms, PricingEngine};
use crate::domain::proposal::ProposalError;

/// Query for a schedule preview.
#[derive(Debug, Clone)]
pub struct PreviewScheduleQuery {
    pub terms: PaymentTerms,
    /// Schedule anchor; defaults to now.
    pub start: Option<Timestamp>,
}

/// Prices terms without storing anything, for the proposal editor.
pub struct PreviewScheduleHandler {
    engine: PricingEngine,
}

impl PreviewScheduleHandler {
    pub fn new(engine: PricingEngine) -> Self {
        Self { engine }
    }

    pub async fn handle(&self, query: PreviewScheduleQuery) -> Result<PaymentSchedule, ProposalError> {
        let start = query.start.unwrap_or_else(Timestamp::now);
        let schedule = self.engine.schedule(&query.terms, start)?;
        tracing::debug!(
            payment_type = %query.terms.payment_type,
            entries = schedule.entries().len(),
            "Previewed payment schedule"
        );
        Ok(schedule)
    }
}
