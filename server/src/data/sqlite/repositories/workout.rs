//! Workout log repository for SQLite operations
//!
//! Each row is one logged set, keyed to a date and an exercise. Listings
//! join through both parents so callers see the date text and exercise
//! name instead of surrogate ids.

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::sqlite::error::is_foreign_key_violation;
use crate::data::types::{NewWorkout, WorkoutByDateRow, WorkoutDetailRow};

/// Log a workout set.
///
/// Fails with `Conflict` when the date or exercise id does not exist.
pub async fn create_workout(pool: &SqlitePool, w: &NewWorkout) -> Result<i64, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "INSERT INTO workouts (date_id, exercise_id, weight, reps, sets, rir, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(w.date_id)
    .bind(w.exercise_id)
    .bind(w.weight)
    .bind(w.reps)
    .bind(w.sets)
    .bind(w.rir)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(r) => Ok(r.last_insert_rowid()),
        Err(e) if is_foreign_key_violation(&e) => Err(SqliteError::Conflict(
            "unknown date_id or exercise_id".to_string(),
        )),
        Err(e) => Err(e.into()),
    }
}

/// All logged sets across all dates, joined with date text and exercise name
pub async fn list_workouts(pool: &SqlitePool) -> Result<Vec<WorkoutDetailRow>, SqliteError> {
    let rows = sqlx::query_as::<_, (i64, String, String, f64, i64, i64, i64)>(
        "SELECT w.id, d.date, e.name, w.weight, w.reps, w.sets, w.rir \
         FROM workouts w \
         JOIN dates d ON w.date_id = d.id \
         JOIN exercise_names e ON w.exercise_id = e.id \
         ORDER BY w.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, date, exercise, weight, reps, sets, rir)| WorkoutDetailRow {
            id,
            date,
            exercise,
            weight,
            reps,
            sets,
            rir,
        })
        .collect())
}

/// The sets logged for one date, joined with exercise names
pub async fn list_workouts_by_date(
    pool: &SqlitePool,
    date_id: i64,
) -> Result<Vec<WorkoutByDateRow>, SqliteError> {
    let rows = sqlx::query_as::<_, (i64, String, f64, i64, i64, i64)>(
        "SELECT w.id, e.name, w.weight, w.reps, w.sets, w.rir \
         FROM workouts w \
         JOIN exercise_names e ON w.exercise_id = e.id \
         WHERE w.date_id = ? \
         ORDER BY w.id",
    )
    .bind(date_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, exercise, weight, reps, sets, rir)| WorkoutByDateRow {
            id,
            exercise,
            weight,
            reps,
            sets,
            rir,
        })
        .collect())
}

/// Update the weight/reps/sets of a logged set.
///
/// rir and the date/exercise associations stay untouched. Returns false
/// when no row matched the id.
pub async fn update_workout(
    pool: &SqlitePool,
    id: i64,
    weight: f64,
    reps: i64,
    sets: i64,
) -> Result<bool, SqliteError> {
    let result = sqlx::query("UPDATE workouts SET weight = ?, reps = ?, sets = ? WHERE id = ?")
        .bind(weight)
        .bind(reps)
        .bind(sets)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a logged set by id.
///
/// Returns false when no row matched the id.
pub async fn delete_workout(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::repositories::test_support::setup_test_pool;
    use crate::data::sqlite::repositories::{date, exercise};

    async fn seed(pool: &SqlitePool) -> (i64, i64) {
        let date_id = date::resolve_or_create(pool, "2025-03-14").await.unwrap();
        let ex = exercise::create_exercise(pool, "Sentadilla").await.unwrap();
        (date_id, ex.id)
    }

    fn set(date_id: i64, exercise_id: i64) -> NewWorkout {
        NewWorkout {
            date_id,
            exercise_id,
            weight: 80.0,
            reps: 8,
            sets: 4,
            rir: 2,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_by_date() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;

        let id = create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();

        let rows = list_workouts_by_date(&pool, date_id).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, id);
        assert_eq!(rows[0].exercise, "Sentadilla");
        assert_eq!(rows[0].weight, 80.0);
        assert_eq!(rows[0].reps, 8);
        assert_eq!(rows[0].sets, 4);
        assert_eq!(rows[0].rir, 2);
    }

    #[tokio::test]
    async fn test_zero_reps_and_sets_are_valid() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;

        let mut w = set(date_id, exercise_id);
        w.reps = 0;
        w.sets = 0;
        w.rir = 0;
        create_workout(&pool, &w).await.unwrap();

        let rows = list_workouts_by_date(&pool, date_id).await.unwrap();
        assert_eq!(rows[0].reps, 0);
        assert_eq!(rows[0].sets, 0);
    }

    #[tokio::test]
    async fn test_create_with_unknown_reference_conflicts() {
        let pool = setup_test_pool().await;
        let (date_id, _) = seed(&pool).await;

        let err = create_workout(&pool, &set(date_id, 999)).await.unwrap_err();
        assert!(matches!(err, SqliteError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_all_joins_date_and_exercise() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;
        let other_date = date::resolve_or_create(&pool, "2025-03-15").await.unwrap();

        create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();
        create_workout(&pool, &set(other_date, exercise_id)).await.unwrap();

        let rows = list_workouts(&pool).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2025-03-14");
        assert_eq!(rows[1].date, "2025-03-15");
        assert_eq!(rows[0].exercise, "Sentadilla");
    }

    #[tokio::test]
    async fn test_update_touches_only_weight_reps_sets() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;
        let id = create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();

        assert!(update_workout(&pool, id, 85.0, 6, 5).await.unwrap());

        let rows = list_workouts_by_date(&pool, date_id).await.unwrap();
        assert_eq!(rows[0].weight, 85.0);
        assert_eq!(rows[0].reps, 6);
        assert_eq!(rows[0].sets, 5);
        // rir unchanged
        assert_eq!(rows[0].rir, 2);
    }

    #[tokio::test]
    async fn test_update_unknown_id_affects_nothing() {
        let pool = setup_test_pool().await;
        assert!(!update_workout(&pool, 42, 85.0, 6, 5).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;
        let id = create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();

        assert!(delete_workout(&pool, id).await.unwrap());
        assert!(!delete_workout(&pool, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleting_date_cascades_workouts() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;
        create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();

        assert!(date::delete_date(&pool, date_id).await.unwrap());
        assert!(list_workouts_by_date(&pool, date_id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleting_exercise_cascades_workouts() {
        let pool = setup_test_pool().await;
        let (date_id, exercise_id) = seed(&pool).await;
        create_workout(&pool, &set(date_id, exercise_id)).await.unwrap();

        assert!(exercise::delete_exercise(&pool, exercise_id).await.unwrap());
        assert!(list_workouts(&pool).await.unwrap().is_empty());
    }
}
