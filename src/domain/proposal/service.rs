//! Services offered on proposals.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Money, ServiceId, ValidationError};

/// Highest accepted price for a single service line (one billion in major units).
pub const MAX_SERVICE_PRICE: Money = Money::from_cents(100_000_000_000);

/// Shared catalog entry that any proposal may reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    /// Feature bullet points, in display order.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        price: Money,
        features: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        validate_price(price)?;
        Ok(Self {
            id: ServiceId::new(),
            name,
            description: None,
            price,
            features,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Ad-hoc service embedded in a single proposal.
///
/// Custom services are copied into the proposal and never shared, so
/// editing one proposal cannot change another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomService {
    pub id: ServiceId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub features: Vec<String>,
}

impl CustomService {
    pub fn new(
        name: impl Into<String>,
        price: Money,
        features: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(name.into())?;
        validate_price(price)?;
        Ok(Self {
            id: ServiceId::new(),
            name,
            description: None,
            price,
            features,
        })
    }

    /// Copies a catalog service into a proposal-scoped custom entry.
    pub fn from_catalog(service: &Service) -> Self {
        Self {
            id: ServiceId::new(),
            name: service.name.clone(),
            description: service.description.clone(),
            price: service.price,
            features: service.features.clone(),
        }
    }
}

fn validate_name(name: String) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field("service_name"));
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: Money) -> Result<(), ValidationError> {
    if price.is_negative() || price > MAX_SERVICE_PRICE {
        return Err(ValidationError::out_of_range(
            "service_price",
            0,
            MAX_SERVICE_PRICE.cents(),
            price.cents(),
        ));
    }
    Ok(())
}
