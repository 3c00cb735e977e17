//! Roster relay endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

/// GET /api/neighbors - Republish the provider's roster body unchanged.
pub async fn relay_neighbors(State(state): State<AppState>) -> impl IntoResponse {
    match state.provider.fetch_raw().await {
        Ok(body) => (StatusCode::OK, Json(body)),
        Err(e) => {
            tracing::error!("Error fetching neighbors data: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch data" })),
            )
        }
    }
}
