//! Merge endpoint
//!
//! POST /merge fetches one supplier payload and runs the full pipeline over
//! it. The response is batch-granular: a boolean status plus outcome tallies.
//! Per-record failures are recovered inside the pipeline; a fetch failure or
//! an unexpected pipeline failure degrades the status to false, is logged,
//! and is recorded for the health endpoint.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{ApiError, ApiResult};
use crate::fusion::MergeReport;
use crate::services::FetchError;
use crate::AppState;

/// POST /merge request
#[derive(Debug, Deserialize)]
pub struct MergeRequest {
    pub source_url: Option<String>,
}

/// POST /merge response
#[derive(Debug, Serialize)]
pub struct MergeResponse {
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<MergeReport>,
}

/// POST /merge
pub async fn merge(
    State(state): State<AppState>,
    Json(request): Json<MergeRequest>,
) -> ApiResult<Json<MergeResponse>> {
    let source_url = request
        .source_url
        .ok_or_else(|| ApiError::BadRequest("source_url missing in the request".to_string()))?;

    let records = match state.fetcher.fetch(&source_url).await {
        Ok(records) => records,
        Err(FetchError::InvalidUrl(message)) => {
            return Err(ApiError::BadRequest(format!("invalid source_url: {message}")));
        }
        Err(e) => {
            error!(source_url = %source_url, error = %e, "Supplier fetch failed");
            *state.last_error.write().await = Some(e.to_string());
            return Ok(Json(MergeResponse {
                status: false,
                report: None,
            }));
        }
    };

    match state.pipeline.merge_batch(&records).await {
        Ok(report) => {
            info!(source_url = %source_url, stored = report.stored, "Merge succeeded");
            // A completed merge supersedes any earlier failure diagnostic
            *state.last_error.write().await = None;
            Ok(Json(MergeResponse {
                status: true,
                report: Some(report),
            }))
        }
        Err(e) => {
            error!(source_url = %source_url, error = %e, "Merge failed");
            *state.last_error.write().await = Some(e.to_string());
            Ok(Json(MergeResponse {
                status: false,
                report: None,
            }))
        }
    }
}

/// Build merge routes
pub fn merge_routes() -> Router<AppState> {
    Router::new().route("/merge", post(merge))
}
