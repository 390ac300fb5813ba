//! Exercise catalog API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::ExerciseRow;

/// Exercise DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ExerciseDto {
    pub id: i64,
    pub name: String,
}

impl From<ExerciseRow> for ExerciseDto {
    fn from(row: ExerciseRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// Request body for creating or renaming an exercise
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ExerciseNameRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Response body for a rename, echoing the new state
#[derive(Debug, Serialize, ToSchema)]
pub struct RenameExerciseResponse {
    pub message: String,
    pub id: i64,
    pub name: String,
}
