//! Hotel read endpoints
//!
//! Both reads are total over the store and return score-stripped canonical
//! records; the score never leaves the reconciliation layer.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use stayfuse_common::Hotel;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// GET /hotels
///
/// Every reconciled hotel, ordered by identity.
pub async fn list_hotels(State(state): State<AppState>) -> Json<Vec<Hotel>> {
    Json(state.store.get_all())
}

/// GET /hotels/{id}
///
/// The authoritative record for one identity.
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Hotel>> {
    state
        .store
        .get(&id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Hotel not found: {id}")))
}

/// Build hotel read routes
pub fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/hotels", get(list_hotels))
        .route("/hotels/:id", get(get_hotel))
}
