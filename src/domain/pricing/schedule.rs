//! Payment schedule value objects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, Timestamp};

/// A single charge within a payment schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub amount: Money,
    /// Days after the schedule start at which the charge is due.
    pub due_offset_days: u32,
    pub label: String,
}

impl ScheduleEntry {
    /// Absolute due date relative to `start`.
    pub fn due_at(&self, start: Timestamp) -> Timestamp {
        start.add_days(i64::from(self.due_offset_days))
    }
}

/// Ongoing charge that continues after the scheduled entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Recurrence {
    None,
    /// Charged every `interval_days`, indefinitely, from `starts_at`.
    Monthly {
        amount: Money,
        interval_days: u32,
        starts_after_days: u32,
        starts_at: Timestamp,
    },
}

impl Recurrence {
    pub fn is_recurring(&self) -> bool {
        matches!(self, Recurrence::Monthly { .. })
    }

    /// Amount charged per recurring cycle, if any.
    pub fn amount(&self) -> Option<Money> {
        match self {
            Recurrence::None => None,
            Recurrence::Monthly { amount, .. } => Some(*amount),
        }
    }
}

/// Immutable payment plan produced by the pricing engine.
///
/// # Invariants
///
/// - `entries` is non-empty and ordered by `due_offset_days`
/// - the entry amounts sum exactly to the proposal cost
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSchedule {
    pub(super) entries: Vec<ScheduleEntry>,
    pub(super) recurrence: Recurrence,
}

impl PaymentSchedule {
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn recurrence(&self) -> &Recurrence {
        &self.recurrence
    }

    /// Sum of all scheduled (non-recurring) charges.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// The charge due at the start of the schedule.
    pub fn first_payment(&self) -> Option<&ScheduleEntry> {
        self.entries.first()
    }

    /// Amounts in schedule order.
    pub fn amounts(&self) -> Vec<Money> {
        self.entries.iter().map(|e| e.amount).collect()
    }

    /// Due offsets in schedule order.
    pub fn offsets(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.due_offset_days).collect()
    }
}
