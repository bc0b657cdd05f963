//! Checkout session port.
//!
//! The payment gateway is opaque: the application asks for a hosted
//! checkout session and hands the returned URL to the client.
//!
//! # Design
//!
//! - **Gateway agnostic**: Stripe today, anything with hosted checkout later
//! - **No silent retries**: failures surface to the caller with a
//!   `retryable` hint and never change the proposal

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode, Money};

/// Port for creating hosted checkout sessions.
#[async_trait]
pub trait CheckoutSessionCreator: Send + Sync {
    /// Create a checkout session for the first scheduled payment.
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError>;
}

/// Billing cadence for subscription checkouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Month,
}

impl BillingInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingInterval::Month => "month",
        }
    }
}

/// Request to create a checkout session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Amount charged now.
    pub amount: Money,

    /// Line item description shown on the checkout page.
    pub description: String,

    /// Pre-filled customer email.
    pub customer_email: String,

    /// Whether the session sets up a recurring subscription.
    pub is_subscription: bool,

    /// Cadence when `is_subscription` is set.
    pub subscription_interval: Option<BillingInterval>,

    /// Our reference (the proposal id), echoed back by the gateway.
    pub client_reference: String,
}

/// Checkout session for payment completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID.
    pub id: String,

    /// URL for the client to complete checkout.
    pub url: String,

    /// When the session expires (Unix timestamp).
    pub expires_at: i64,
}

/// Errors from checkout operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutError {
    pub code: CheckoutErrorCode,
    pub message: String,
    /// Provider's error code, if any.
    pub provider_code: Option<String>,
    pub retryable: bool,
}

impl CheckoutError {
    pub fn new(code: CheckoutErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
            retryable: code.is_retryable(),
        }
    }

    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::NetworkError, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::AuthenticationError, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(CheckoutErrorCode::InvalidRequest, message)
    }

    pub fn not_configured() -> Self {
        Self::new(
            CheckoutErrorCode::NotConfigured,
            "Checkout is not configured",
        )
    }
}

impl std::fmt::Display for CheckoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for CheckoutError {}

impl From<CheckoutError> for DomainError {
    fn from(err: CheckoutError) -> Self {
        let mut domain = DomainError::new(ErrorCode::ExternalServiceError, err.message);
        if let Some(code) = err.provider_code {
            domain = domain.with_detail("provider_code", code);
        }
        domain.with_detail("retryable", err.retryable.to_string())
    }
}

/// Checkout error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutErrorCode {
    NetworkError,
    AuthenticationError,
    RateLimitExceeded,
    InvalidRequest,
    /// No gateway credentials are configured.
    NotConfigured,
    ProviderError,
}

impl CheckoutErrorCode {
    /// Check if this error type is typically retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CheckoutErrorCode::NetworkError | CheckoutErrorCode::RateLimitExceeded
        )
    }
}

impl std::fmt::Display for CheckoutErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CheckoutErrorCode::NetworkError => "network_error",
            CheckoutErrorCode::AuthenticationError => "authentication_error",
            CheckoutErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            CheckoutErrorCode::InvalidRequest => "invalid_request",
            CheckoutErrorCode::NotConfigured => "not_configured",
            CheckoutErrorCode::ProviderError => "provider_error",
        };
        write!(f, "{}", s)
    }
}
