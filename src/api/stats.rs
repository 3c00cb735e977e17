//! Dashboard statistics endpoint.

use axum::extract::State;

use super::{snapshot, success, ApiResult};
use crate::aggregate;
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/stats - Summary figures for the dashboard.
pub async fn get_stats(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let (roster, fetched_at) = snapshot(&state).await?;
    success(aggregate::summarize(&roster), fetched_at)
}
