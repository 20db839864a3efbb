mod config;
mod models;
mod render;
mod routes;
mod state;
mod truth_engine;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, HANDLE_ENV};
use crate::routes::build_router;
use crate::state::AppState;
use crate::truth_engine::TruthEngineClient;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing handle is not fatal here; only malformed typed settings are.
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Truth Engine viewer v{}", env!("CARGO_PKG_VERSION"));

    if config.handle.is_none() {
        warn!("{HANDLE_ENV} is not set; every page will show the Profile Unavailable panel");
    }

    let client = TruthEngineClient::new(config.api_base.clone(), config.handle.clone())
        .context("Failed to build HTTP client")?;
    info!(
        "Truth Engine client initialized (api: {}, strategy: {:?})",
        config.api_base, config.render_strategy
    );

    let state = AppState {
        source: Arc::new(client),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
