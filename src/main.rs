#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::config::{Config, ConfigError};
use crate::services::identity::{HttpIdentityApi, IdentityApi, IdentityError};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "finvault failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    // Pages and the dashboard still work without an identity backend.
    let identity: Option<Arc<dyn IdentityApi>> = match &config.identity_api_url {
        Some(url) => {
            let api = HttpIdentityApi::new(url.as_str(), config.identity_timeouts)?;
            tracing::info!(
                base_url = api.base_url(),
                timeout_secs = config.identity_timeouts.request_secs,
                "identity backend configured"
            );
            Some(Arc::new(api))
        }
        None => {
            tracing::warn!("IDENTITY_API_URL not set; auth routes disabled");
            None
        }
    };

    let state = state::AppState::new(identity);
    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = %config.port, "finvault listening");
    axum::serve(listener, app).await?;
    Ok(())
}
