//! Workout log API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, CreatedResponse, MessageResponse};
use crate::data::SqliteService;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::repositories::workout;

use types::{CreateWorkoutRequest, UpdateWorkoutRequest, WorkoutByDateDto, WorkoutDto};

/// Shared state for Workouts API endpoints
#[derive(Clone)]
pub struct WorkoutsApiState {
    pub database: Arc<SqliteService>,
}

/// Build Workouts API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = WorkoutsApiState { database };

    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route("/{id}", axum::routing::put(update_workout).delete(delete_workout))
        .route("/date/{date_id}", get(list_workouts_by_date))
        .with_state(state)
}

/// Log a workout set
#[utoipa::path(
    post,
    path = "/api/workouts",
    tag = "workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Set logged", body = CreatedResponse),
        (status = 400, description = "Missing/invalid field or unknown date/exercise id")
    )
)]
pub async fn create_workout(
    State(state): State<WorkoutsApiState>,
    ValidatedJson(body): ValidatedJson<CreateWorkoutRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = workout::create_workout(state.database.pool(), &body.into())
        .await
        .map_err(|e| match e {
            SqliteError::Conflict(message) => {
                ApiError::bad_request("UNKNOWN_REFERENCE", message)
            }
            other => ApiError::from_sqlite(other),
        })?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// List all logged sets across all dates
#[utoipa::path(
    get,
    path = "/api/workouts",
    tag = "workouts",
    responses(
        (status = 200, description = "All logged sets with date and exercise name", body = [WorkoutDto])
    )
)]
pub async fn list_workouts(
    State(state): State<WorkoutsApiState>,
) -> Result<Json<Vec<WorkoutDto>>, ApiError> {
    let rows = workout::list_workouts(state.database.pool())
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(WorkoutDto::from).collect()))
}

/// List the sets logged for one date
#[utoipa::path(
    get,
    path = "/api/workouts/date/{date_id}",
    tag = "workouts",
    params(("date_id" = i64, Path, description = "Date registry id")),
    responses(
        (status = 200, description = "Sets logged for the date", body = [WorkoutByDateDto])
    )
)]
pub async fn list_workouts_by_date(
    State(state): State<WorkoutsApiState>,
    Path(date_id): Path<i64>,
) -> Result<Json<Vec<WorkoutByDateDto>>, ApiError> {
    let rows = workout::list_workouts_by_date(state.database.pool(), date_id)
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(WorkoutByDateDto::from).collect()))
}

/// Update a logged set's weight/reps/sets
#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    tag = "workouts",
    params(("id" = i64, Path, description = "Workout id")),
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Set updated", body = MessageResponse),
        (status = 400, description = "Missing/invalid field"),
        (status = 404, description = "No workout with that id")
    )
)]
pub async fn update_workout(
    State(state): State<WorkoutsApiState>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<UpdateWorkoutRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let updated =
        workout::update_workout(state.database.pool(), id, body.weight, body.reps, body.sets)
            .await
            .map_err(ApiError::from_sqlite)?;

    if !updated {
        return Err(ApiError::not_found(
            "WORKOUT_NOT_FOUND",
            "No workout with that id",
        ));
    }

    Ok(Json(MessageResponse::new("Workout updated")))
}

/// Delete a logged set
#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    tag = "workouts",
    params(("id" = i64, Path, description = "Workout id")),
    responses(
        (status = 200, description = "Set deleted", body = MessageResponse),
        (status = 404, description = "No workout with that id")
    )
)]
pub async fn delete_workout(
    State(state): State<WorkoutsApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = workout::delete_workout(state.database.pool(), id)
        .await
        .map_err(ApiError::from_sqlite)?;

    if !deleted {
        return Err(ApiError::not_found(
            "WORKOUT_NOT_FOUND",
            "No workout with that id",
        ));
    }

    Ok(Json(MessageResponse::new("Workout deleted")))
}
