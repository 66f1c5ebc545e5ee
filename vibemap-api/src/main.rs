//! vibemap-api - venue discovery HTTP service
//!
//! Serves the café/bar listing API: scored venues from the places
//! provider (or the built-in seed set), ranked and filtered per request.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use vibemap_api::config::{CliArgs, Config};
use vibemap_api::places::FoursquareClient;
use vibemap_api::{build_router, AppState};
use vibemap_common::score::ScorePolicy;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "Starting Vibemap API (vibemap-api) v{}",
        env!("CARGO_PKG_VERSION")
    );

    let args = CliArgs::parse();
    let config = Config::resolve(&args);

    let policy = match ScorePolicy::by_name(&config.policy_name) {
        Some(policy) => policy,
        None => {
            warn!(
                "Unknown scoring policy {:?}; falling back to classic-coffee",
                config.policy_name
            );
            ScorePolicy::classic_coffee()
        }
    };
    info!("Scoring policy: {}", policy.name);

    let places = match &config.api_key {
        Some(key) => {
            let client = FoursquareClient::new(key.clone())
                .map_err(|e| anyhow::anyhow!("failed to create places client: {}", e))?;
            info!("✓ Places provider configured");
            Some(client)
        }
        None => None,
    };

    let addr = config.bind_addr();
    let state = AppState::new(config, policy, places);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("vibemap-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
