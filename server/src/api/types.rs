//! Shared API types
//!
//! Every failure serializes to the same `{error, code, message}` body.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::data::SqliteError;

/// Standard API error response
#[derive(Debug)]
pub enum ApiError {
    BadRequest { code: String, message: String },
    NotFound { code: String, message: String },
    Internal { message: String },
}

impl ApiError {
    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadRequest {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NotFound {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Map a data-layer error onto the wire contract.
    ///
    /// Uniqueness/reference conflicts answer 400 (the contract keeps the
    /// original's status for duplicates); everything else is logged and
    /// answered with a generic 500 so engine details never leak.
    pub fn from_sqlite(e: SqliteError) -> Self {
        match e {
            SqliteError::Conflict(message) => Self::BadRequest {
                code: "CONFLICT".to_string(),
                message,
            },
            e => {
                tracing::error!(error = %e, "SQLite error");
                Self::Internal {
                    message: "Database operation failed".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, code, message) = match self {
            Self::BadRequest { code, message } => {
                (StatusCode::BAD_REQUEST, "bad_request", code, message)
            }
            Self::NotFound { code, message } => (StatusCode::NOT_FOUND, "not_found", code, message),
            Self::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "INTERNAL".to_string(),
                message,
            ),
        };
        (
            status,
            Json(serde_json::json!({
                "error": error_type,
                "code": code,
                "message": message
            })),
        )
            .into_response()
    }
}

/// Acknowledgement body for writes that do not return a resource
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body for creations that return the generated id
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_bad_request() {
        let err = ApiError::from_sqlite(SqliteError::Conflict("taken".to_string()));
        match err {
            ApiError::BadRequest { code, message } => {
                assert_eq!(code, "CONFLICT");
                assert_eq!(message, "taken");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }

    #[test]
    fn test_engine_errors_map_to_generic_internal() {
        let err = ApiError::from_sqlite(SqliteError::Database(sqlx::Error::RowNotFound));
        match err {
            ApiError::Internal { message } => {
                assert_eq!(message, "Database operation failed");
            }
            other => panic!("unexpected mapping: {:?}", other),
        }
    }
}
