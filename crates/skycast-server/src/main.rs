//! Skycast server: weather and saved-location HTTP API.

mod api;
mod config;
mod error;
mod state;

use std::time::Duration;

use anyhow::{Context, Result};
use tower_http::timeout::TimeoutLayer;

use skycast_weather::OpenWeatherClient;

use crate::config::Config;
use crate::state::AppState;

/// Hard ceiling on request handling, comfortably above the provider
/// timeout so handlers surface a provider error first.
const REQUEST_DEADLINE_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let (config, _validation) = Config::load_validated()?;

    let weather = OpenWeatherClient::new(
        config.openweather_api_key.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let app = api::router(AppState::new(weather))
        .layer(TimeoutLayer::new(Duration::from_secs(REQUEST_DEADLINE_SECS)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Skycast listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Skycast shut down");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    tracing::info!("Shutdown signal received");
}
