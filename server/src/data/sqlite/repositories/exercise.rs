//! Exercise catalog repository for SQLite operations

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::sqlite::error::is_unique_violation;
use crate::data::types::ExerciseRow;

/// Create a new exercise name.
///
/// Fails with `Conflict` when the name is already taken.
pub async fn create_exercise(pool: &SqlitePool, name: &str) -> Result<ExerciseRow, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query("INSERT INTO exercise_names (name, created_at) VALUES (?, ?)")
        .bind(name)
        .bind(now)
        .execute(pool)
        .await;

    match result {
        Ok(r) => Ok(ExerciseRow {
            id: r.last_insert_rowid(),
            name: name.to_string(),
        }),
        Err(e) if is_unique_violation(&e) => Err(SqliteError::Conflict(format!(
            "exercise name '{}' already exists",
            name
        ))),
        Err(e) => Err(e.into()),
    }
}

/// All exercise names, in insertion order
pub async fn list_exercises(pool: &SqlitePool) -> Result<Vec<ExerciseRow>, SqliteError> {
    let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM exercise_names ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ExerciseRow { id, name })
        .collect())
}

/// Rename an exercise.
///
/// Fails with `Conflict` when the new name is taken; returns false when
/// the id has no matching row.
pub async fn rename_exercise(
    pool: &SqlitePool,
    id: i64,
    name: &str,
) -> Result<bool, SqliteError> {
    let result = sqlx::query("UPDATE exercise_names SET name = ? WHERE id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await;

    match result {
        Ok(r) => Ok(r.rows_affected() > 0),
        Err(e) if is_unique_violation(&e) => Err(SqliteError::Conflict(format!(
            "exercise name '{}' already exists",
            name
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Delete an exercise by id, cascading to workouts that reference it.
///
/// Returns false when no row matched the id.
pub async fn delete_exercise(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM exercise_names WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::repositories::test_support::setup_test_pool;

    #[tokio::test]
    async fn test_create_and_list() {
        let pool = setup_test_pool().await;

        let squat = create_exercise(&pool, "Sentadilla").await.unwrap();
        let bench = create_exercise(&pool, "Press banca").await.unwrap();
        assert_ne!(squat.id, bench.id);

        let all = list_exercises(&pool).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Sentadilla");
        assert_eq!(all[1].name, "Press banca");
    }

    #[tokio::test]
    async fn test_duplicate_name_conflicts_without_new_row() {
        let pool = setup_test_pool().await;
        create_exercise(&pool, "Sentadilla").await.unwrap();

        let err = create_exercise(&pool, "Sentadilla").await.unwrap_err();
        assert!(matches!(err, SqliteError::Conflict(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercise_names")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_rename() {
        let pool = setup_test_pool().await;
        let row = create_exercise(&pool, "Sentadilla").await.unwrap();

        assert!(rename_exercise(&pool, row.id, "Sentadilla frontal").await.unwrap());

        let all = list_exercises(&pool).await.unwrap();
        assert_eq!(all[0].name, "Sentadilla frontal");
    }

    #[tokio::test]
    async fn test_rename_to_taken_name_conflicts() {
        let pool = setup_test_pool().await;
        create_exercise(&pool, "Sentadilla").await.unwrap();
        let bench = create_exercise(&pool, "Press banca").await.unwrap();

        let err = rename_exercise(&pool, bench.id, "Sentadilla")
            .await
            .unwrap_err();
        assert!(matches!(err, SqliteError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_rename_unknown_id_affects_nothing() {
        let pool = setup_test_pool().await;
        assert!(!rename_exercise(&pool, 42, "Peso muerto").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let pool = setup_test_pool().await;
        let row = create_exercise(&pool, "Sentadilla").await.unwrap();

        assert!(delete_exercise(&pool, row.id).await.unwrap());
        assert!(!delete_exercise(&pool, row.id).await.unwrap());
        assert!(list_exercises(&pool).await.unwrap().is_empty());
    }
}
