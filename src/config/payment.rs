//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::adapters::stripe::StripeConfig;

use super::error::ValidationError;

/// Hosted checkout configuration (Stripe).
///
/// Without `stripe_api_key` the server runs with the mock checkout.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret key
    pub stripe_api_key: Option<SecretString>,

    /// Where Stripe sends the client after paying
    #[serde(default = "default_success_url")]
    pub success_url: String,

    /// Where Stripe sends the client after abandoning checkout
    #[serde(default = "default_cancel_url")]
    pub cancel_url: String,

    /// ISO currency code for charges
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Stripe API base URL override
    pub api_base_url: Option<String>,
}

impl PaymentConfig {
    pub fn is_configured(&self) -> bool {
        self.stripe_api_key.is_some()
    }

    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key
            .as_ref()
            .is_some_and(|key| key.expose_secret().starts_with("sk_test_"))
    }

    /// Adapter configuration, if a key is present.
    pub fn stripe_config(&self) -> Option<StripeConfig> {
        let key = self.stripe_api_key.as_ref()?;
        let mut config = StripeConfig::new(
            key.expose_secret().clone(),
            self.success_url.clone(),
            self.cancel_url.clone(),
        )
        .with_currency(self.currency.clone());
        if let Some(url) = &self.api_base_url {
            config = config.with_base_url(url.clone());
        }
        Some(config)
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = &self.stripe_api_key {
            if !key.expose_secret().starts_with("sk_") {
                return Err(ValidationError::InvalidStripeKey);
            }
        }
        if !is_http_url(&self.success_url) {
            return Err(ValidationError::InvalidUrl("payment.success_url"));
        }
        if !is_http_url(&self.cancel_url) {
            return Err(ValidationError::InvalidUrl("payment.cancel_url"));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidCurrency);
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            stripe_api_key: None,
            success_url: default_success_url(),
            cancel_url: default_cancel_url(),
            currency: default_currency(),
            api_base_url: None,
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn default_success_url() -> String {
    "http://localhost:3000/portal/checkout/success".to_string()
}

fn default_cancel_url() -> String {
    "http://localhost:3000/portal/checkout/cancel".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}
