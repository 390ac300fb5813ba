//! Exercise catalog API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, MessageResponse};
use crate::data::SqliteService;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::repositories::exercise;

use types::{ExerciseDto, ExerciseNameRequest, RenameExerciseResponse};

/// Shared state for Exercises API endpoints
#[derive(Clone)]
pub struct ExercisesApiState {
    pub database: Arc<SqliteService>,
}

/// Build Exercises API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = ExercisesApiState { database };

    Router::new()
        .route("/", get(list_exercises).post(create_exercise))
        .route("/{id}", put(rename_exercise).delete(delete_exercise))
        .with_state(state)
}

fn duplicate_name_error(e: SqliteError) -> ApiError {
    match e {
        SqliteError::Conflict(_) => ApiError::bad_request(
            "DUPLICATE_EXERCISE_NAME",
            "Exercise name already exists",
        ),
        other => ApiError::from_sqlite(other),
    }
}

/// Create an exercise name
#[utoipa::path(
    post,
    path = "/api/exercise_names",
    tag = "exercises",
    request_body = ExerciseNameRequest,
    responses(
        (status = 201, description = "Exercise created", body = ExerciseDto),
        (status = 400, description = "Missing name or duplicate")
    )
)]
pub async fn create_exercise(
    State(state): State<ExercisesApiState>,
    ValidatedJson(body): ValidatedJson<ExerciseNameRequest>,
) -> Result<(StatusCode, Json<ExerciseDto>), ApiError> {
    let row = exercise::create_exercise(state.database.pool(), &body.name)
        .await
        .map_err(duplicate_name_error)?;

    Ok((StatusCode::CREATED, Json(ExerciseDto::from(row))))
}

/// List all exercise names
#[utoipa::path(
    get,
    path = "/api/exercise_names",
    tag = "exercises",
    responses(
        (status = 200, description = "All exercise names", body = [ExerciseDto])
    )
)]
pub async fn list_exercises(
    State(state): State<ExercisesApiState>,
) -> Result<Json<Vec<ExerciseDto>>, ApiError> {
    let rows = exercise::list_exercises(state.database.pool())
        .await
        .map_err(ApiError::from_sqlite)?;

    Ok(Json(rows.into_iter().map(ExerciseDto::from).collect()))
}

/// Rename an exercise
#[utoipa::path(
    put,
    path = "/api/exercise_names/{id}",
    tag = "exercises",
    params(("id" = i64, Path, description = "Exercise id")),
    request_body = ExerciseNameRequest,
    responses(
        (status = 200, description = "Exercise renamed", body = RenameExerciseResponse),
        (status = 400, description = "Missing name or duplicate"),
        (status = 404, description = "No exercise with that id")
    )
)]
pub async fn rename_exercise(
    State(state): State<ExercisesApiState>,
    Path(id): Path<i64>,
    ValidatedJson(body): ValidatedJson<ExerciseNameRequest>,
) -> Result<Json<RenameExerciseResponse>, ApiError> {
    let renamed = exercise::rename_exercise(state.database.pool(), id, &body.name)
        .await
        .map_err(duplicate_name_error)?;

    if !renamed {
        return Err(ApiError::not_found(
            "EXERCISE_NOT_FOUND",
            "No exercise with that id",
        ));
    }

    Ok(Json(RenameExerciseResponse {
        message: "Exercise renamed".to_string(),
        id,
        name: body.name,
    }))
}

/// Delete an exercise and the workouts referencing it
#[utoipa::path(
    delete,
    path = "/api/exercise_names/{id}",
    tag = "exercises",
    params(("id" = i64, Path, description = "Exercise id")),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 404, description = "No exercise with that id")
    )
)]
pub async fn delete_exercise(
    State(state): State<ExercisesApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = exercise::delete_exercise(state.database.pool(), id)
        .await
        .map_err(ApiError::from_sqlite)?;

    if !deleted {
        return Err(ApiError::not_found(
            "EXERCISE_NOT_FOUND",
            "No exercise with that id",
        ));
    }

    Ok(Json(MessageResponse::new("Exercise deleted")))
}
