//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `ENGAGEMENT_DESK`
//! prefix and nested values are separated by double underscores. Every
//! section has defaults, so an empty environment yields a runnable
//! development server with the mock checkout.
//!
//! # Example
//!
//! ```no_run
//! use engagement_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod expiry;
mod lifecycle;
mod payment;
mod pricing;
mod server;

pub use error::{ConfigError, ValidationError};
pub use expiry::{ProposalsConfig, QuestionnairesConfig};
pub use lifecycle::LifecycleConfig;
pub use payment::PaymentConfig;
pub use pricing::PricingConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment schedule tuning
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub proposals: ProposalsConfig,

    #[serde(default)]
    pub questionnaires: QuestionnairesConfig,

    /// Client status suggestion thresholds
    #[serde(default)]
    pub lifecycle: LifecycleConfig,

    /// Hosted checkout (Stripe)
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ENGAGEMENT_DESK` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// - `ENGAGEMENT_DESK__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ENGAGEMENT_DESK__PAYMENT__STRIPE_API_KEY=...` -> `payment.stripe_api_key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ENGAGEMENT_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    ///
    /// # Errors
    ///
    /// Returns the first section's `ValidationError`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.pricing.validate()?;
        self.proposals.validate()?;
        self.questionnaires.validate()?;
        self.lifecycle.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "ENGAGEMENT_DESK__SERVER__PORT",
        "ENGAGEMENT_DESK__SERVER__ENVIRONMENT",
        "ENGAGEMENT_DESK__PRICING__PARTIAL_REMAINDER_DUE_DAYS",
        "ENGAGEMENT_DESK__PROPOSALS__DEFAULT_EXPIRES_IN_DAYS",
        "ENGAGEMENT_DESK__LIFECYCLE__CHURNED_AFTER_DAYS",
        "ENGAGEMENT_DESK__PAYMENT__STRIPE_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        clear_env();
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[]).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.proposals.default_expires_in_days, 30);
        assert_eq!(config.lifecycle.inactive_after_days, 90);
        assert!(!config.payment.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[
            ("ENGAGEMENT_DESK__SERVER__PORT", "3000"),
            ("ENGAGEMENT_DESK__PRICING__PARTIAL_REMAINDER_DUE_DAYS", "14"),
            ("ENGAGEMENT_DESK__PROPOSALS__DEFAULT_EXPIRES_IN_DAYS", "7"),
            ("ENGAGEMENT_DESK__PAYMENT__STRIPE_API_KEY", "sk_test_xxx"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pricing.policy().partial_remainder_due_days, 14);
        assert_eq!(config.proposals.default_expires_in_days, 7);
        assert!(config.payment.is_test_mode());
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ENGAGEMENT_DESK__SERVER__ENVIRONMENT", "production")]).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_reports_bad_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = load_with(&[("ENGAGEMENT_DESK__LIFECYCLE__CHURNED_AFTER_DAYS", "30")]).unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLifecycleThresholds)
        );
    }
}
