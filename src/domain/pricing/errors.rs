//! Payment-term validation errors.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Money};

/// Reasons a set of payment terms cannot be turned into a schedule.
///
/// Terms are rejected, never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    #[error("Cost must be greater than zero, got {cost}")]
    NonPositiveCost { cost: Money },

    #[error("Down payment cannot be negative, got {down_payment}")]
    NegativeDownPayment { down_payment: Money },

    #[error("Down payment {down_payment} exceeds cost {cost}")]
    DownPaymentExceedsCost { down_payment: Money, cost: Money },

    #[error("Installment plans need at least 2 installments, got {count}")]
    TooFewInstallments { count: u32 },

    #[error("Installment plans allow at most {max} installments, got {count}")]
    TooManyInstallments { count: u32, max: u32 },

    #[error("{count} installments every {interval_days} days run past the schedule range")]
    ScheduleTooLong { count: u32, interval_days: u32 },
}

impl PricingError {
    /// Name of the payment field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            PricingError::NonPositiveCost { .. } => "cost",
            PricingError::NegativeDownPayment { .. }
            | PricingError::DownPaymentExceedsCost { .. } => "down_payment",
            PricingError::TooFewInstallments { .. }
            | PricingError::TooManyInstallments { .. }
            | PricingError::ScheduleTooLong { .. } => "installment_count",
        }
    }
}

impl From<PricingError> for DomainError {
    fn from(err: PricingError) -> Self {
        DomainError::new(ErrorCode::InvalidPaymentTerms, err.to_string())
            .with_detail("field", err.field())
    }
}
