//! Request and response bodies for proposal endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CustomServiceInput, ProposalDecision};
use crate::domain::foundation::{Money, Timestamp};
use crate::domain::pricing::{PaymentSchedule, PaymentTerms, Recurrence};
use crate::domain::proposal::{PriceBreakdown, Proposal};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body for `POST /api/proposals/schedule-preview`.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulePreviewRequest {
    #[serde(flatten)]
    pub terms: PaymentTerms,
    /// Anchor for due dates; defaults to now.
    #[serde(default)]
    pub start: Option<Timestamp>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CustomServiceRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub features: Vec<String>,
}

impl From<CustomServiceRequest> for CustomServiceInput {
    fn from(req: CustomServiceRequest) -> Self {
        CustomServiceInput {
            name: req.name,
            description: req.description,
            price: req.price,
            features: req.features,
        }
    }
}

/// Body for `POST /api/proposals`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProposalRequest {
    pub client_id: String,
    pub title: String,
    #[serde(default)]
    pub selected_services: Vec<String>,
    #[serde(default)]
    pub custom_services: Vec<CustomServiceRequest>,
    #[serde(flatten)]
    pub terms: PaymentTerms,
    #[serde(default)]
    pub expires_in_days: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequest {
    pub decision: ProposalDecision,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleEntryResponse {
    pub label: String,
    pub amount: Money,
    pub due_offset_days: u32,
    pub due_at: Timestamp,
}

/// A payment schedule with due dates resolved against a start.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub entries: Vec<ScheduleEntryResponse>,
    pub recurrence: Recurrence,
    pub total: Money,
}

impl ScheduleResponse {
    pub fn anchored(schedule: &PaymentSchedule, start: Timestamp) -> Self {
        Self {
            entries: schedule
                .entries()
                .iter()
                .map(|entry| ScheduleEntryResponse {
                    label: entry.label.clone(),
                    amount: entry.amount,
                    due_offset_days: entry.due_offset_days,
                    due_at: entry.due_at(start),
                })
                .collect(),
            recurrence: schedule.recurrence().clone(),
            total: schedule.total(),
        }
    }
}

/// Response for a newly created proposal.
#[derive(Debug, Clone, Serialize)]
pub struct CreateProposalResponse {
    pub proposal: Proposal,
    pub schedule: ScheduleResponse,
    pub price_breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub checkout_url: String,
    pub expires_at: i64,
}
