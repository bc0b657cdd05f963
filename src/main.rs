//! Engagement Desk server entry point.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use engagement_desk::adapters::http::{build_router, AppState, EngagementSettings};
use engagement_desk::adapters::memory::{InMemoryTemplateCatalog, TemplateSeedError};
use engagement_desk::adapters::stripe::{MockCheckoutSessionCreator, StripeCheckoutAdapter};
use engagement_desk::config::{AppConfig, ConfigError};
use engagement_desk::ports::CheckoutSessionCreator;
use engagement_desk::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error(transparent)]
    TemplateSeed(#[from] TemplateSeedError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    telemetry::init(&config.server)?;

    let templates = match &config.questionnaires.template_seed_path {
        Some(path) => {
            let catalog = InMemoryTemplateCatalog::from_yaml_file(path).await?;
            info!(path = %path.display(), "Loaded questionnaire templates");
            catalog
        }
        None => {
            warn!("No template seed configured; questionnaire catalog is empty");
            InMemoryTemplateCatalog::new()
        }
    };

    let checkout: Arc<dyn CheckoutSessionCreator> = match config.payment.stripe_config() {
        Some(stripe) => {
            info!(test_mode = config.payment.is_test_mode(), "Stripe checkout enabled");
            Arc::new(StripeCheckoutAdapter::new(stripe))
        }
        None => {
            warn!("No Stripe key configured; using mock checkout sessions");
            Arc::new(MockCheckoutSessionCreator::new())
        }
    };

    let state = AppState::in_memory(templates, checkout, EngagementSettings::from_config(&config));
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(environment = ?config.server.environment, %addr, "Engagement desk listening");

    axum::serve(listener, app).await?;
    Ok(())
}
