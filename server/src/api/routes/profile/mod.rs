//! Profile API endpoints (the single implicit user)

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::{ApiError, CreatedResponse, MessageResponse};
use crate::data::SqliteService;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::repositories::profile;

use types::{CreateProfileRequest, DeleteProfileRequest, ProfileDto, UpdateProfileRequest};

/// Shared state for Profile API endpoints
#[derive(Clone)]
pub struct ProfileApiState {
    pub database: Arc<SqliteService>,
}

/// Build Profile API routes
pub fn routes(database: Arc<SqliteService>) -> Router<()> {
    let state = ProfileApiState { database };

    Router::new()
        .route(
            "/",
            get(get_profile)
                .post(create_profile)
                .put(update_profile)
                .delete(delete_profile),
        )
        .with_state(state)
}

/// Create the profile
#[utoipa::path(
    post,
    path = "/api/usuario",
    tag = "profile",
    request_body = CreateProfileRequest,
    responses(
        (status = 201, description = "Profile created", body = CreatedResponse),
        (status = 400, description = "Missing/invalid field, or a profile already exists")
    )
)]
pub async fn create_profile(
    State(state): State<ProfileApiState>,
    ValidatedJson(body): ValidatedJson<CreateProfileRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = profile::create_profile(state.database.pool(), &body.into())
        .await
        .map_err(|e| match e {
            SqliteError::Conflict(_) => ApiError::bad_request(
                "PROFILE_EXISTS",
                "A profile already exists; update it instead",
            ),
            other => ApiError::from_sqlite(other),
        })?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Get the profile
#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = "profile",
    responses(
        (status = 200, description = "The stored profile", body = ProfileDto),
        (status = 404, description = "No profile exists")
    )
)]
pub async fn get_profile(
    State(state): State<ProfileApiState>,
) -> Result<Json<ProfileDto>, ApiError> {
    let row = profile::get_profile(state.database.pool())
        .await
        .map_err(ApiError::from_sqlite)?
        .ok_or_else(|| ApiError::not_found("PROFILE_NOT_FOUND", "No profile exists"))?;

    Ok(Json(ProfileDto::from(row)))
}

/// Update the profile in place
#[utoipa::path(
    put,
    path = "/api/usuario",
    tag = "profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = MessageResponse),
        (status = 400, description = "Missing/invalid field"),
        (status = 404, description = "No profile with that id")
    )
)]
pub async fn update_profile(
    State(state): State<ProfileApiState>,
    ValidatedJson(body): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (id, fields) = body.into_fields();

    let updated = profile::update_profile(state.database.pool(), id, &fields)
        .await
        .map_err(ApiError::from_sqlite)?;

    if !updated {
        return Err(ApiError::not_found(
            "PROFILE_NOT_FOUND",
            "No profile with that id",
        ));
    }

    Ok(Json(MessageResponse::new("Profile updated")))
}

/// Delete the profile
#[utoipa::path(
    delete,
    path = "/api/usuario",
    tag = "profile",
    request_body = DeleteProfileRequest,
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 404, description = "No profile with that id")
    )
)]
pub async fn delete_profile(
    State(state): State<ProfileApiState>,
    ValidatedJson(body): ValidatedJson<DeleteProfileRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = profile::delete_profile(state.database.pool(), body.id)
        .await
        .map_err(ApiError::from_sqlite)?;

    if !deleted {
        return Err(ApiError::not_found(
            "PROFILE_NOT_FOUND",
            "No profile with that id",
        ));
    }

    Ok(Json(MessageResponse::new("Profile deleted")))
}
