//! Daily metric API types
//!
//! One DTO/request pair per unit so the wire field names stay what the
//! frontend expects: `calories`, `liters`, `hours`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::MetricRow;

/// Calorie row DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct CalorieDto {
    pub id: i64,
    pub date_id: i64,
    pub calories: i64,
}

impl From<MetricRow<i64>> for CalorieDto {
    fn from(row: MetricRow<i64>) -> Self {
        Self {
            id: row.id,
            date_id: row.date_id,
            calories: row.value,
        }
    }
}

/// Water row DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct WaterDto {
    pub id: i64,
    pub date_id: i64,
    pub liters: f64,
}

impl From<MetricRow<f64>> for WaterDto {
    fn from(row: MetricRow<f64>) -> Self {
        Self {
            id: row.id,
            date_id: row.date_id,
            liters: row.value,
        }
    }
}

/// Sleep row DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct SleepDto {
    pub id: i64,
    pub date_id: i64,
    pub hours: f64,
}

impl From<MetricRow<f64>> for SleepDto {
    fn from(row: MetricRow<f64>) -> Self {
        Self {
            id: row.id,
            date_id: row.date_id,
            hours: row.value,
        }
    }
}

/// Request body for logging calories.
///
/// Targets a day either by registry id or by text key; the latter
/// registers the day on the fly. Zero is a valid value.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LogCaloriesRequest {
    pub date_id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "Date must be 1-32 characters"))]
    pub date: Option<String>,

    #[validate(range(min = 0, message = "Calories must not be negative"))]
    pub calories: i64,
}

/// Request body for logging water intake
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LogWaterRequest {
    pub date_id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "Date must be 1-32 characters"))]
    pub date: Option<String>,

    #[validate(range(min = 0.0, message = "Liters must not be negative"))]
    pub liters: f64,
}

/// Request body for logging sleep hours
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LogSleepRequest {
    pub date_id: Option<i64>,

    #[validate(length(min = 1, max = 32, message = "Date must be 1-32 characters"))]
    pub date: Option<String>,

    #[validate(range(min = 0.0, message = "Hours must not be negative"))]
    pub hours: f64,
}
