use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use clarify::adapters::ai::{OpenAIConfig, OpenAIProvider};
use clarify::adapters::http::{app_router, DecisionHandlers, SuggestionHandlers};
use clarify::adapters::memory::InMemoryDecisionStore;
use clarify::adapters::rate_limiter::InMemoryRateLimiter;
use clarify::application::handlers::SuggestDecisionDataHandler;
use clarify::config::{AppConfig, ConfigError, ValidationError};
use clarify::ports::{AIError, AIProvider, DecisionStore, RateLimiter};
use clarify::telemetry::{self, TelemetryError};

#[derive(Debug, Error)]
enum StartupError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    #[error("failed to build AI provider: {0}")]
    Provider(#[from] AIError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    telemetry::init(&config.server)?;

    let store: Arc<dyn DecisionStore> = Arc::new(InMemoryDecisionStore::new());
    let rate_limiter: Arc<dyn RateLimiter> =
        Arc::new(InMemoryRateLimiter::from_config(&config.rate_limit));

    let provider: Option<Arc<dyn AIProvider>> = match OpenAIConfig::from_app_config(&config.ai) {
        Some(ai_config) => Some(Arc::new(OpenAIProvider::new(ai_config)?)),
        None => {
            warn!("No AI API key configured; suggestions are disabled");
            None
        }
    };

    let suggest_handler = Arc::new(SuggestDecisionDataHandler::new(
        provider,
        config.ai.temperature,
    ));

    let app = app_router(
        DecisionHandlers::new(store),
        SuggestionHandlers::new(suggest_handler),
        rate_limiter,
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(
        environment = ?config.server.environment,
        %addr,
        model = %config.ai.model,
        "Clarify API listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
