//! stayfuse-merge library interface
//!
//! Exposes the merge pipeline and router for integration testing.

pub mod api;
pub mod config;
pub mod error;
pub mod fusion;
pub mod services;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::fusion::MergePipeline;
use crate::services::SourceFetcher;
use crate::store::HotelStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Reconciliation store: one authoritative record per hotel identity
    pub store: HotelStore,
    /// Supplier payload fetcher
    pub fetcher: SourceFetcher,
    /// Merge pipeline over the store
    pub pipeline: MergePipeline,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
    /// Last merge error for diagnostic purposes
    pub last_error: Arc<RwLock<Option<String>>>,
}

impl AppState {
    pub fn new() -> Self {
        let store = HotelStore::new();
        Self {
            pipeline: MergePipeline::new(store.clone()),
            store,
            fetcher: SourceFetcher::new(),
            startup_time: Utc::now(),
            last_error: Arc::new(RwLock::new(None)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge the configured default supplier sources, in order.
///
/// Runs once at startup before the listener binds. A failing source is
/// logged and skipped; the remaining sources still merge.
pub async fn merge_default_sources(state: &AppState, urls: &[String]) {
    for url in urls {
        let records = match state.fetcher.fetch(url).await {
            Ok(records) => records,
            Err(e) => {
                warn!(source_url = %url, error = %e, "Default source fetch failed");
                continue;
            }
        };
        match state.pipeline.merge_batch(&records).await {
            Ok(report) => {
                info!(source_url = %url, stored = report.stored, "Default source merged")
            }
            Err(e) => warn!(source_url = %url, error = %e, "Default source merge failed"),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::merge_routes())
        .merge(api::hotel_routes())
        .merge(api::health_routes())
        .with_state(state)
}
