mod career;
mod config;
mod errors;
mod models;
mod providers;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::providers::{BlsClient, CareerOneStopClient, OnetClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing provider credentials)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.provider_timeout_secs);

    let occupations = CareerOneStopClient::new(
        config.career_one_stop_base_uri.clone(),
        config.career_one_stop_user_id.clone(),
        config.career_one_stop_token.clone(),
        timeout,
    )?;
    info!("CareerOneStop client initialized ({})", config.career_one_stop_base_uri);

    let skills = OnetClient::new(
        config.onet_base_uri.clone(),
        config.onet_username.clone(),
        config.onet_password.clone(),
        timeout,
    )?;
    info!("O*NET client initialized ({})", config.onet_base_uri);

    let timeseries = BlsClient::new(config.bls_base_uri.clone(), config.bls_api_key.clone(), timeout)?;
    info!("BLS client initialized ({})", config.bls_base_uri);

    // Build app state
    let state = AppState {
        config: config.clone(),
        occupations: Arc::new(occupations),
        skills: Arc::new(skills),
        timeseries: Arc::new(timeseries),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
