//! Date registry API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, CreatedResponse, MessageResponse};
use crate::data::SqliteService;
use crate::data::sqlite::repositories::date;

use types::{CreateDateRequest, DateDto};

/// Shared state for Dates API endpoints
#[derive(Clone)]
pub struct DatesApiState {
    pub database: Arc<SqliteService>,
}

/// Build Dates API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = DatesApiState { database };

    Router::new()
        .route("/", post(resolve_or_create_date))
        .route("/{date}", get(lookup_date).delete(delete_date))
        .with_state(state)
}

/// Resolve-or-create a calendar day, returning its id either way
#[utoipa::path(
    post,
    path = "/api/dates",
    tag = "dates",
    request_body = CreateDateRequest,
    responses(
        (status = 200, description = "The day's registry id (created or existing)", body = CreatedResponse),
        (status = 400, description = "Missing or empty date")
    )
)]
pub async fn resolve_or_create_date(
    State(state): State<DatesApiState>,
    ValidatedJson(body): ValidatedJson<CreateDateRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let id = date::resolve_or_create(state.database.pool(), &body.date)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(CreatedResponse { id }))
}

/// Look up a calendar day by its text key
#[utoipa::path(
    get,
    path = "/api/dates/{date}",
    tag = "dates",
    params(("date" = String, Path, description = "Calendar day text key")),
    responses(
        (status = 200, description = "The registered day", body = DateDto),
        (status = 404, description = "Day not registered")
    )
)]
pub async fn lookup_date(
    State(state): State<DatesApiState>,
    Path(date_text): Path<String>,
) -> Result<Json<DateDto>, ApiError> {
    let row = date::lookup(state.database.pool(), &date_text)
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| ApiError::not_found("DATE_NOT_FOUND", "Date not registered"))?;

    Ok(Json(DateDto::from(row)))
}

/// Delete a day and everything logged against it
#[utoipa::path(
    delete,
    path = "/api/dates/{id}",
    tag = "dates",
    params(("id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "Day and dependent rows deleted", body = MessageResponse),
        (status = 404, description = "No date with that id")
    )
)]
pub async fn delete_date(
    State(state): State<DatesApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = date::delete_date(state.database.pool(), id)
        .await
        .map_err(ApiError::from_sqlite)?;

    if !deleted {
        return Err(ApiError::not_found("DATE_NOT_FOUND", "No date with that id"));
    }

    Ok(Json(MessageResponse::new("Date deleted")))
}
