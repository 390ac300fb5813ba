//! Daily metric API endpoints (calories, water, sleep)
//!
//! The three units share one repository and one routing shape; only the
//! DTO field names differ. Each unit mounts at its own prefix
//! (`/api/kcal`, `/api/water`, `/api/sleep`).

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, MessageResponse};
use crate::data::SqliteService;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::repositories::metric::{self, MetricKind};

use types::{CalorieDto, LogCaloriesRequest, LogSleepRequest, LogWaterRequest, SleepDto, WaterDto};

/// Shared state for Metrics API endpoints
#[derive(Clone)]
pub struct MetricsApiState {
    pub database: Arc<SqliteService>,
}

/// Build calorie API routes (mounted at /api/kcal)
pub fn kcal_routes(database: Arc<SqliteService>) -> Router<()> {
    let state = MetricsApiState { database };

    Router::new()
        .route("/", get(list_calories).post(log_calories))
        .route("/{date_id}", get(get_calories))
        .route("/date/{date_id}", get(list_calories_by_date))
        .with_state(state)
}

/// Build water API routes (mounted at /api/water)
pub fn water_routes(database: Arc<SqliteService>) -> Router<()> {
    let state = MetricsApiState { database };

    Router::new()
        .route("/", get(list_water).post(log_water))
        .route("/{date_id}", get(get_water))
        .route("/date/{date_id}", get(list_water_by_date))
        .with_state(state)
}

/// Build sleep API routes (mounted at /api/sleep)
pub fn sleep_routes(database: Arc<SqliteService>) -> Router<()> {
    let state = MetricsApiState { database };

    Router::new()
        .route("/", get(list_sleep).post(log_sleep))
        .route("/{date_id}", get(get_sleep))
        .route("/date/{date_id}", get(list_sleep_by_date))
        .with_state(state)
}

/// Write a metric value against a day given by id or by text key.
///
/// The text-key path registers the day and writes the value in one
/// transaction.
async fn log_metric<V>(
    state: &MetricsApiState,
    kind: MetricKind,
    date_id: Option<i64>,
    date: Option<String>,
    value: V,
) -> Result<(), ApiError>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + 'static,
{
    let result = match (date_id, date) {
        (Some(_), Some(_)) => {
            return Err(ApiError::bad_request(
                "AMBIGUOUS_DATE",
                "Provide either date_id or date, not both",
            ));
        }
        (None, None) => {
            return Err(ApiError::bad_request(
                "MISSING_DATE",
                "Either date_id or date is required",
            ));
        }
        (Some(id), None) => metric::upsert(state.database.pool(), kind, id, value).await,
        (None, Some(text)) => metric::upsert_for_date(state.database.pool(), kind, &text, value)
            .await
            .map(|_| ()),
    };

    result.map_err(|e| match e {
        SqliteError::Conflict(message) => ApiError::bad_request("UNKNOWN_REFERENCE", message),
        other => ApiError::from_sqlite(other),
    })
}

// ============================================================================
// Calories
// ============================================================================

/// Log the calories consumed on a day
#[utoipa::path(
    post,
    path = "/api/kcal",
    tag = "metrics",
    request_body = LogCaloriesRequest,
    responses(
        (status = 200, description = "Calories saved", body = MessageResponse),
        (status = 400, description = "Missing date reference or invalid value")
    )
)]
pub async fn log_calories(
    State(state): State<MetricsApiState>,
    ValidatedJson(body): ValidatedJson<LogCaloriesRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    log_metric(
        &state,
        MetricKind::Calories,
        body.date_id,
        body.date,
        body.calories,
    )
    .await?;
    Ok(Json(MessageResponse::new("Calories saved")))
}

/// Get the calories logged for one date
#[utoipa::path(
    get,
    path = "/api/kcal/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The day's calorie row", body = CalorieDto),
        (status = 404, description = "Nothing logged for the date")
    )
)]
pub async fn get_calories(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<CalorieDto>, ApiError> {
    let row = metric::get_by_date::<i64>(state.database.pool(), MetricKind::Calories, date_id)
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| {
            ApiError::not_found(
                "METRIC_NOT_FOUND",
                MetricKind::Calories.not_found_message(),
            )
        })?;

    Ok(Json(CalorieDto::from(row)))
}

/// List every calorie row across all dates
#[utoipa::path(
    get,
    path = "/api/kcal",
    tag = "metrics",
    responses(
        (status = 200, description = "All calorie rows", body = [CalorieDto])
    )
)]
pub async fn list_calories(
    State(state): State<MetricsApiState>,
) -> Result<Json<Vec<CalorieDto>>, ApiError> {
    let rows = metric::list_all::<i64>(state.database.pool(), MetricKind::Calories)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(CalorieDto::from).collect()))
}

/// List the (at most one) calorie row for a date
#[utoipa::path(
    get,
    path = "/api/kcal/date/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The date's calorie rows", body = [CalorieDto])
    )
)]
pub async fn list_calories_by_date(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<Vec<CalorieDto>>, ApiError> {
    let rows = metric::list_by_date::<i64>(state.database.pool(), MetricKind::Calories, date_id)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(CalorieDto::from).collect()))
}

// ============================================================================
// Water
// ============================================================================

/// Log the liters of water drunk on a day
#[utoipa::path(
    post,
    path = "/api/water",
    tag = "metrics",
    request_body = LogWaterRequest,
    responses(
        (status = 200, description = "Water intake saved", body = MessageResponse),
        (status = 400, description = "Missing date reference or invalid value")
    )
)]
pub async fn log_water(
    State(state): State<MetricsApiState>,
    ValidatedJson(body): ValidatedJson<LogWaterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    log_metric(
        &state,
        MetricKind::Water,
        body.date_id,
        body.date,
        body.liters,
    )
    .await?;
    Ok(Json(MessageResponse::new("Water intake saved")))
}

/// Get the water intake logged for one date
#[utoipa::path(
    get,
    path = "/api/water/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The day's water row", body = WaterDto),
        (status = 404, description = "Nothing logged for the date")
    )
)]
pub async fn get_water(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<WaterDto>, ApiError> {
    let row = metric::get_by_date::<f64>(state.database.pool(), MetricKind::Water, date_id)
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| {
            ApiError::not_found("METRIC_NOT_FOUND", MetricKind::Water.not_found_message())
        })?;

    Ok(Json(WaterDto::from(row)))
}

/// List every water row across all dates
#[utoipa::path(
    get,
    path = "/api/water",
    tag = "metrics",
    responses(
        (status = 200, description = "All water rows", body = [WaterDto])
    )
)]
pub async fn list_water(
    State(state): State<MetricsApiState>,
) -> Result<Json<Vec<WaterDto>>, ApiError> {
    let rows = metric::list_all::<f64>(state.database.pool(), MetricKind::Water)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(WaterDto::from).collect()))
}

/// List the (at most one) water row for a date
#[utoipa::path(
    get,
    path = "/api/water/date/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The date's water rows", body = [WaterDto])
    )
)]
pub async fn list_water_by_date(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<Vec<WaterDto>>, ApiError> {
    let rows = metric::list_by_date::<f64>(state.database.pool(), MetricKind::Water, date_id)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(WaterDto::from).collect()))
}

// ============================================================================
// Sleep
// ============================================================================

/// Log the hours slept on a day
#[utoipa::path(
    post,
    path = "/api/sleep",
    tag = "metrics",
    request_body = LogSleepRequest,
    responses(
        (status = 200, description = "Sleep hours saved", body = MessageResponse),
        (status = 400, description = "Missing date reference or invalid value")
    )
)]
pub async fn log_sleep(
    State(state): State<MetricsApiState>,
    ValidatedJson(body): ValidatedJson<LogSleepRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    log_metric(
        &state,
        MetricKind::Sleep,
        body.date_id,
        body.date,
        body.hours,
    )
    .await?;
    Ok(Json(MessageResponse::new("Sleep hours saved")))
}

/// Get the sleep hours logged for one date
#[utoipa::path(
    get,
    path = "/api/sleep/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The day's sleep row", body = SleepDto),
        (status = 404, description = "Nothing logged for the date")
    )
)]
pub async fn get_sleep(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<SleepDto>, ApiError> {
    let row = metric::get_by_date::<f64>(state.database.pool(), MetricKind::Sleep, date_id)
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| {
            ApiError::not_found("METRIC_NOT_FOUND", MetricKind::Sleep.not_found_message())
        })?;

    Ok(Json(SleepDto::from(row)))
}

/// List every sleep row across all dates
#[utoipa::path(
    get,
    path = "/api/sleep",
    tag = "metrics",
    responses(
        (status = 200, description = "All sleep rows", body = [SleepDto])
    )
)]
pub async fn list_sleep(
    State(state): State<MetricsApiState>,
) -> Result<Json<Vec<SleepDto>>, ApiError> {
    let rows = metric::list_all::<f64>(state.database.pool(), MetricKind::Sleep)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(SleepDto::from).collect()))
}

/// List the (at most one) sleep row for a date
#[utoipa::path(
    get,
    path = "/api/sleep/date/{date_id}",
    tag = "metrics",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "The date's sleep rows", body = [SleepDto])
    )
)]
pub async fn list_sleep_by_date(
    State(state): State<MetricsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<Vec<SleepDto>>, ApiError> {
    let rows = metric::list_by_date::<f64>(state.database.pool(), MetricKind::Sleep, date_id)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(SleepDto::from).collect()))
}
