//! REST API module.
//!
//! The relay republishes the provider's body as-is; every other endpoint
//! wraps its payload in the success envelope below.

mod neighbors;
mod participants;
mod stats;

pub use neighbors::*;
pub use participants::*;
pub use stats::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::Participant;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    /// When the roster snapshot behind `data` was fetched.
    pub fetched_at: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, fetched_at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            fetched_at: fetched_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, fetched_at: DateTime<Utc>) -> ApiResult<T> {
    Ok(ApiResponse::new(data, fetched_at))
}

/// One fresh roster snapshot and the time it was taken.
pub(crate) async fn snapshot(
    state: &AppState,
) -> Result<(Vec<Participant>, DateTime<Utc>), AppError> {
    let fetched_at = Utc::now();
    let roster = state.provider.fetch_roster().await?;
    Ok((roster, fetched_at))
}
