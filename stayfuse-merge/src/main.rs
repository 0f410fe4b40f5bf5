//! stayfuse-merge - Hotel Data Merge Microservice
//!
//! Ingests hotel records from heterogeneous supplier feeds and reconciles
//! them into one canonical, scored record per hotel identity, exposed over
//! HTTP REST.

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use stayfuse_merge::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting stayfuse-merge (Hotel Data Merge) microservice");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let port = stayfuse_merge::config::resolve_port();

    let state = AppState::new();

    let default_sources = stayfuse_merge::config::resolve_source_urls();
    if !default_sources.is_empty() {
        stayfuse_merge::merge_default_sources(&state, &default_sources).await;
    }

    let app = stayfuse_merge::build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("Listening on http://127.0.0.1:{port}");
    info!("Health check: http://127.0.0.1:{port}/health");

    axum::serve(listener, app).await?;

    Ok(())
}
