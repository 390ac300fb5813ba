//! Shared row types for the data layer

/// The singleton profile row
///
/// Wide enough that positional tuple decoding gets unwieldy; field names
/// match the column names so FromRow maps it directly.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub target_weight: f64,
    pub water_goal: f64,
    pub sleep_goal: f64,
    pub kcal_goal: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Field values for creating or overwriting the profile
#[derive(Debug, Clone)]
pub struct ProfileFields {
    pub name: String,
    pub age: i64,
    pub weight: f64,
    pub height: f64,
    pub target_weight: f64,
    pub water_goal: f64,
    pub sleep_goal: f64,
    pub kcal_goal: i64,
}

/// A calendar-day row in the date registry
#[derive(Debug, Clone, PartialEq)]
pub struct DateRow {
    pub id: i64,
    pub date: String,
}

/// A per-day metric row; the value type depends on the metric kind
/// (calories are integers, water liters and sleep hours are reals)
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow<V> {
    pub id: i64,
    pub date_id: i64,
    pub value: V,
}

/// An exercise catalog row
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRow {
    pub id: i64,
    pub name: String,
}

/// Field values for logging a workout set
#[derive(Debug, Clone)]
pub struct NewWorkout {
    pub date_id: i64,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub rir: i64,
}

/// A workout row joined with its date and exercise name
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDetailRow {
    pub id: i64,
    pub date: String,
    pub exercise: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub rir: i64,
}

/// A workout row joined with its exercise name (date implied by the query)
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutByDateRow {
    pub id: i64,
    pub exercise: String,
    pub weight: f64,
    pub reps: i64,
    pub sets: i64,
    pub rir: i64,
}
