//! Stripe Checkout adapter.
//!
//! Creates hosted Checkout Sessions with inline `price_data`, so no Stripe
//! products or prices need to exist ahead of time.
//!
//! # Configuration
//!
//! ```ignore
//! let config = StripeConfig::new(secret_key, success_url, cancel_url);
//! let adapter = StripeCheckoutAdapter::new(config);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::ports::{
    CheckoutError, CheckoutErrorCode, CheckoutRequest, CheckoutSession, CheckoutSessionCreator,
};

/// Stripe sessions expire after 24 hours unless told otherwise.
const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Stripe API configuration.
#[derive(Clone)]
pub struct StripeConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...).
    api_key: SecretString,

    /// Base URL for Stripe API (default: https://api.stripe.com).
    api_base_url: String,

    /// ISO currency code, lowercase.
    currency: String,

    success_url: String,
    cancel_url: String,
}

impl StripeConfig {
    pub fn new(
        api_key: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            api_base_url: "https://api.stripe.com".to_string(),
            currency: "usd".to_string(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_lowercase();
        self
    }
}

impl std::fmt::Debug for StripeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeConfig")
            .field("api_key", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .field("currency", &self.currency)
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    url: Option<String>,
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Stripe implementation of `CheckoutSessionCreator`.
pub struct StripeCheckoutAdapter {
    config: StripeConfig,
    http_client: reqwest::Client,
}

impl StripeCheckoutAdapter {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Form parameters for `POST /v1/checkout/sessions`.
    fn checkout_params(&self, request: &CheckoutRequest) -> Vec<(&'static str, String)> {
        let mode = if request.is_subscription {
            "subscription"
        } else {
            "payment"
        };

        let mut params = vec![
            ("mode", mode.to_string()),
            ("customer_email", request.customer_email.clone()),
            ("client_reference_id", request.client_reference.clone()),
            ("success_url", self.config.success_url.clone()),
            ("cancel_url", self.config.cancel_url.clone()),
            ("line_items[0][quantity]", "1".to_string()),
            ("line_items[0][price_data][currency]", self.config.currency.clone()),
            (
                "line_items[0][price_data][unit_amount]",
                request.amount.cents().to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]",
                request.description.clone(),
            ),
            ("metadata[proposal_id]", request.client_reference.clone()),
        ];

        if let (true, Some(interval)) = (request.is_subscription, request.subscription_interval) {
            params.push((
                "line_items[0][price_data][recurring][interval]",
                interval.as_str().to_string(),
            ));
        }

        params
    }

    fn map_error_response(status: reqwest::StatusCode, body: &str) -> CheckoutError {
        let parsed = serde_json::from_str::<StripeErrorEnvelope>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|e| e.error.message.clone())
            .unwrap_or_else(|| format!("Stripe API error ({})", status));

        let code = match status.as_u16() {
            401 | 403 => CheckoutErrorCode::AuthenticationError,
            429 => CheckoutErrorCode::RateLimitExceeded,
            400 | 402 | 404 => CheckoutErrorCode::InvalidRequest,
            _ => CheckoutErrorCode::ProviderError,
        };

        let mut err = CheckoutError::new(code, message);
        if let Some(provider_code) = parsed.and_then(|e| e.error.code) {
            err = err.with_provider_code(provider_code);
        }
        err
    }
}

#[async_trait]
impl CheckoutSessionCreator for StripeCheckoutAdapter {
    async fn create_checkout_session(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutSession, CheckoutError> {
        if !request.amount.is_positive() {
            return Err(CheckoutError::invalid_request(
                "Checkout amount must be positive",
            ));
        }

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);
        let params = self.checkout_params(&request);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.api_key.expose_secret(), Option::<&str>::None)
            .form(&params)
            .send()
            .await
            .map_err(|e| CheckoutError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = Self::map_error_response(status, &body);
            tracing::warn!(
                status = %status,
                code = %err.code,
                "Stripe rejected checkout session"
            );
            return Err(err);
        }

        let session: StripeSessionResponse = response.json().await.map_err(|e| {
            CheckoutError::new(
                CheckoutErrorCode::ProviderError,
                format!("Failed to parse Stripe response: {}", e),
            )
        })?;

        let expires_at = session
            .expires_at
            .unwrap_or_else(|| chrono::Utc::now().timestamp() + DEFAULT_SESSION_TTL_SECS);
        let url = session
            .url
            .unwrap_or_else(|| format!("https://checkout.stripe.com/c/pay/{}", session.id));

        Ok(CheckoutSession {
            id: session.id,
            url,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;
    use crate::ports::BillingInterval;

    fn adapter() -> StripeCheckoutAdapter {
        StripeCheckoutAdapter::new(
            StripeConfig::new(
                "sk_test_123",
                "https://app.example.com/paid",
                "https://app.example.com/cancelled",
            )
            .with_currency("EUR"),
        )
    }

    fn request(is_subscription: bool) -> CheckoutRequest {
        CheckoutRequest {
            amount: Money::from_cents(37_500),
            description: "Website refresh - Installment 1 of 4".to_string(),
            customer_email: "ada@example.com".to_string(),
            is_subscription,
            subscription_interval: is_subscription.then_some(BillingInterval::Month),
            client_reference: "prop-1".to_string(),
        }
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn one_off_payment_uses_payment_mode() {
        let params = adapter().checkout_params(&request(false));
        assert_eq!(param(&params, "mode"), Some("payment"));
        assert_eq!(
            param(&params, "line_items[0][price_data][unit_amount]"),
            Some("37500")
        );
        assert_eq!(
            param(&params, "line_items[0][price_data][currency]"),
            Some("eur")
        );
        assert!(param(&params, "line_items[0][price_data][recurring][interval]").is_none());
    }

    #[test]
    fn subscription_sets_recurring_interval() {
        let params = adapter().checkout_params(&request(true));
        assert_eq!(param(&params, "mode"), Some("subscription"));
        assert_eq!(
            param(&params, "line_items[0][price_data][recurring][interval]"),
            Some("month")
        );
    }

    #[test]
    fn debug_output_redacts_key() {
        let debug = format!("{:?}", adapter().config);
        assert!(!debug.contains("sk_test_123"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn error_response_maps_status_and_provider_code() {
        let body = r#"{"error": {"code": "rate_limit", "message": "Too many requests"}}"#;
        let err =
            StripeCheckoutAdapter::map_error_response(reqwest::StatusCode::TOO_MANY_REQUESTS, body);
        assert_eq!(err.code, CheckoutErrorCode::RateLimitExceeded);
        assert!(err.retryable);
        assert_eq!(err.provider_code.as_deref(), Some("rate_limit"));
        assert_eq!(err.message, "Too many requests");
    }

    #[test]
    fn unparseable_error_body_still_maps() {
        let err = StripeCheckoutAdapter::map_error_response(
            reqwest::StatusCode::UNAUTHORIZED,
            "<html>nope</html>",
        );
        assert_eq!(err.code, CheckoutErrorCode::AuthenticationError);
        assert!(err.provider_code.is_none());
    }

    #[tokio::test]
    async fn zero_amount_is_rejected_before_calling_stripe() {
        let mut req = request(false);
        req.amount = Money::ZERO;
        let err = adapter().create_checkout_session(req).await.unwrap_err();
        assert_eq!(err.code, CheckoutErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn unreachable_api_is_a_retryable_network_error() {
        let adapter = StripeCheckoutAdapter::new(
            StripeConfig::new("sk_test", "https://s", "https://c").with_base_url("http://127.0.0.1:1"),
        );
        let err = adapter
            .create_checkout_session(request(false))
            .await
            .unwrap_err();
        assert_eq!(err.code, CheckoutErrorCode::NetworkError);
        assert!(err.retryable);
    }
}
