//! Daily analytics API endpoint

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::types::ApiError;
use crate::data::SqliteService;
use crate::domain::summary::{self, DailySummary};

/// Shared state for Analytics API endpoints
#[derive(Clone)]
pub struct AnalyticsApiState {
    pub database: Arc<SqliteService>,
}

/// Build Analytics API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = AnalyticsApiState { database };

    Router::new()
        .route("/daily/{date_id}", get(get_daily_summary))
        .with_state(state)
}

/// Summarize one day against the profile goals
#[utoipa::path(
    get,
    path = "/api/analytics/daily/{date_id}",
    tag = "analytics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "Feedback strings and raw values", body = DailySummary),
        (status = 404, description = "No profile exists")
    )
)]
pub async fn get_daily_summary(
    State(state): State<AnalyticsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<DailySummary>, ApiError> {
    let summary = summary::daily_summary(state.database.pool(), date_id)
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| ApiError::not_found("PROFILE_NOT_FOUND", "No profile exists"))?;

    Ok(Json(summary))
}
