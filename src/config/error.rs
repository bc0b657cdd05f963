//! Configuration errors.

use thiserror::Error;

/// Loading failed, or a loaded value is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A section's `validate()` rejected a value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set")]
    MissingRequired(&'static str),

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("{0} is not a bindable address")]
    InvalidSocketAddr(String),

    #[error("server.request_timeout_secs must be between 1 and 300")]
    InvalidTimeout,

    #[error("{0} must be at least one day")]
    NonPositiveDays(&'static str),

    #[error("{0} must not exceed {1} days")]
    TooManyDays(&'static str, u32),

    #[error("lifecycle.churned_after_days must exceed lifecycle.inactive_after_days")]
    InvalidLifecycleThresholds,

    #[error("payment.stripe_api_key must be a secret key (sk_...)")]
    InvalidStripeKey,

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),

    #[error("payment.currency must be a three-letter ISO code")]
    InvalidCurrency,
}
