//! Payment structure choices offered on a proposal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Money;

/// How the client pays the proposal cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Entire cost due immediately.
    Full,
    /// Down payment now, remaining balance later.
    Partial,
    /// Cost split into equal monthly installments.
    Installments,
}

impl PaymentType {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentType::Full => "Full payment",
            PaymentType::Partial => "Partial payment",
            PaymentType::Installments => "Installments",
        }
    }
}

impl std::fmt::Display for PaymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw payment parameters as entered by the operator.
///
/// `down_payment` only matters for `Partial`, `installment_count` only for
/// `Installments`; the other fields are ignored for the remaining types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerms {
    pub cost: Money,
    pub payment_type: PaymentType,
    #[serde(default)]
    pub down_payment: Money,
    #[serde(default)]
    pub installment_count: u32,
    #[serde(default)]
    pub is_recurring: bool,
}

impl PaymentTerms {
    /// Terms for a single payment of `cost`.
    pub fn full(cost: Money) -> Self {
        Self {
            cost,
            payment_type: PaymentType::Full,
            down_payment: Money::ZERO,
            installment_count: 0,
            is_recurring: false,
        }
    }

    /// Terms for a down payment followed by the remaining balance.
    pub fn partial(cost: Money, down_payment: Money) -> Self {
        Self {
            payment_type: PaymentType::Partial,
            down_payment,
            ..Self::full(cost)
        }
    }

    /// Terms for `count` monthly installments.
    pub fn installments(cost: Money, count: u32) -> Self {
        Self {
            payment_type: PaymentType::Installments,
            installment_count: count,
            ..Self::full(cost)
        }
    }

    /// Marks the terms as recurring.
    pub fn recurring(mut self) -> Self {
        self.is_recurring = true;
        self
    }
}
