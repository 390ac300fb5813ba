//! Date registry API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::DateRow;

/// Date DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct DateDto {
    pub id: i64,
    pub date: String,
}

impl From<DateRow> for DateDto {
    fn from(row: DateRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
        }
    }
}

/// Request body for resolving-or-creating a date
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateDateRequest {
    #[validate(length(min = 1, max = 32, message = "Date must be 1-32 characters"))]
    pub date: String,
}
