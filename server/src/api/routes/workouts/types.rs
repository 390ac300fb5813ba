//! Workout log API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::{NewWorkout, WorkoutByDateRow, WorkoutDetailRow};

/// Workout DTO with date and exercise name (unfiltered listing)
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutDto {
    pub id: i64,
    pub date: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub rir: i64,
}

impl From<WorkoutDetailRow> for WorkoutDto {
    fn from(row: WorkoutDetailRow) -> Self {
        Self {
            id: row.id,
            date: row.date,
            exercise: row.exercise,
            weight: row.weight,
            reps: row.reps,
            sets: row.sets,
            rir: row.rir,
        }
    }
}

/// Workout DTO for a single date's listing (date implied by the query)
#[derive(Debug, Serialize, ToSchema)]
pub struct WorkoutByDateDto {
    pub id: i64,
    pub exercise: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub rir: i64,
}

impl From<WorkoutByDateRow> for WorkoutByDateDto {
    fn from(row: WorkoutByDateRow) -> Self {
        Self {
            id: row.id,
            exercise: row.exercise,
            weight: row.weight,
            reps: row.reps,
            sets: row.sets,
            rir: row.rir,
        }
    }
}

/// Request body for logging a set.
///
/// All six fields are required; zero reps/sets/rir are valid values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    pub date_id: i64,
    pub exercise_id: i64,

    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: f64,

    #[validate(range(min = 0, message = "Reps must not be negative"))]
    pub reps: i64,

    #[validate(range(min = 0, message = "Sets must not be negative"))]
    pub sets: i64,

    #[validate(range(min = 0, message = "RIR must not be negative"))]
    pub rir: i64,
}

impl From<CreateWorkoutRequest> for NewWorkout {
    fn from(req: CreateWorkoutRequest) -> Self {
        Self {
            date_id: req.date_id,
            exercise_id: req.exercise_id,
            weight: req.weight,
            reps: req.reps,
            sets: req.sets,
            rir: req.rir,
        }
    }
}

/// Request body for updating a logged set (weight/reps/sets only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[validate(range(min = 0.0, message = "Weight must not be negative"))]
    pub weight: f64,

    #[validate(range(min = 0, message = "Reps must not be negative"))]
    pub reps: i64,

    #[validate(range(min = 0, message = "Sets must not be negative"))]
    pub sets: i64,
}
