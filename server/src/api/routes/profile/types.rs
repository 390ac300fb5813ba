//! Profile API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::{ProfileFields, ProfileRow};

/// Profile DTO for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileDto {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub target_weight: f64,
    pub water_goal: f64,
    pub sleep_goal: f64,
    pub kcal_goal: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for ProfileDto {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            weight: row.weight,
            height: row.height,
            target_weight: row.target_weight,
            water_goal: row.water_goal,
            sleep_goal: row.sleep_goal,
            kcal_goal: row.kcal_goal,
            created_at: DateTime::from_timestamp(row.created_at, 0).unwrap_or_else(Utc::now),
            updated_at: DateTime::from_timestamp(row.updated_at, 0).unwrap_or_else(Utc::now),
        }
    }
}

/// Request body for creating the profile.
///
/// Every field is required; zero-valued goals are accepted (presence is
/// checked, not truthiness).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,

    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: f64,

    #[validate(range(min = 0.0, message = "Height must not be negative"))]
    pub height: f64,

    #[validate(range(min = 0.0, message = "Target weight must not be negative"))]
    pub target_weight: f64,

    #[validate(range(min = 0.0, message = "Water goal must not be negative"))]
    pub water_goal: f64,

    #[validate(range(min = 0.0, message = "Sleep goal must not be negative"))]
    pub sleep_goal: f64,

    #[validate(range(min = 0, message = "Kcal goal must not be negative"))]
    pub kcal_goal: i64,
}

impl From<CreateProfileRequest> for ProfileFields {
    fn from(req: CreateProfileRequest) -> Self {
        Self {
            name: req.name,
            age: req.age,
            weight: req.weight,
            height: req.height,
            target_weight: req.target_weight,
            water_goal: req.water_goal,
            sleep_goal: req.sleep_goal,
            kcal_goal: req.kcal_goal,
        }
    }
}

/// Request body for updating the profile (id plus all fields)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    pub id: i64,

    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(range(min = 0, max = 150, message = "Age must be between 0 and 150"))]
    pub age: i64,

    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: f64,

    #[validate(range(min = 0.0, message = "Height must not be negative"))]
    pub height: f64,

    #[validate(range(min = 0.0, message = "Target weight must not be negative"))]
    pub target_weight: f64,

    #[validate(range(min = 0.0, message = "Water goal must not be negative"))]
    pub water_goal: f64,

    #[validate(range(min = 0.0, message = "Sleep goal must not be negative"))]
    pub sleep_goal: f64,

    #[validate(range(min = 0, message = "Kcal goal must not be negative"))]
    pub kcal_goal: i64,
}

impl UpdateProfileRequest {
    pub fn into_fields(self) -> (i64, ProfileFields) {
        (
            self.id,
            ProfileFields {
                name: self.name,
                age: self.age,
                weight: self.weight,
                height: self.height,
                target_weight: self.target_weight,
                water_goal: self.water_goal,
                sleep_goal: self.sleep_goal,
                kcal_goal: self.kcal_goal,
            },
        )
    }
}

/// Request body for deleting the profile
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteProfileRequest {
    pub id: i64,
}
