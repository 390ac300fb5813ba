//! Profile repository for SQLite operations
//!
//! The profile is a singleton row with a fixed id, so "the current user" is
//! always an exact-key lookup rather than a latest-row query.

use sqlx::SqlitePool;

use crate::core::constants::PROFILE_ROW_ID;
use crate::data::sqlite::SqliteError;
use crate::data::sqlite::error::is_unique_violation;
use crate::data::types::{ProfileFields, ProfileRow};

/// Create the singleton profile row.
///
/// Returns the fixed row id. Fails with `Conflict` if a profile already
/// exists; callers update it in place instead of stacking rows.
pub async fn create_profile(
    pool: &SqlitePool,
    fields: &ProfileFields,
) -> Result<i64, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "INSERT INTO profile (id, name, age, weight, height, target_weight, water_goal, sleep_goal, kcal_goal, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(PROFILE_ROW_ID)
    .bind(&fields.name)
    .bind(fields.age)
    .bind(fields.weight)
    .bind(fields.height)
    .bind(fields.target_weight)
    .bind(fields.water_goal)
    .bind(fields.sleep_goal)
    .bind(fields.kcal_goal)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(PROFILE_ROW_ID),
        Err(e) if is_unique_violation(&e) => {
            Err(SqliteError::Conflict("a profile already exists".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Get the singleton profile row
pub async fn get_profile(pool: &SqlitePool) -> Result<Option<ProfileRow>, SqliteError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        "SELECT id, name, age, weight, height, target_weight, water_goal, sleep_goal, kcal_goal, created_at, updated_at \
         FROM profile WHERE id = ?",
    )
    .bind(PROFILE_ROW_ID)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Overwrite all profile fields in place by id.
///
/// Returns false when no row matched the id.
pub async fn update_profile(
    pool: &SqlitePool,
    id: i64,
    fields: &ProfileFields,
) -> Result<bool, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let result = sqlx::query(
        "UPDATE profile SET name = ?, age = ?, weight = ?, height = ?, target_weight = ?, \
         water_goal = ?, sleep_goal = ?, kcal_goal = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&fields.name)
    .bind(fields.age)
    .bind(fields.weight)
    .bind(fields.height)
    .bind(fields.target_weight)
    .bind(fields.water_goal)
    .bind(fields.sleep_goal)
    .bind(fields.kcal_goal)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete the profile by id.
///
/// Returns false when no row matched the id.
pub async fn delete_profile(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM profile WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sqlite::repositories::test_support::setup_test_pool;

    fn sample_fields() -> ProfileFields {
        ProfileFields {
            name: "Ana".to_string(),
            age: 28,
            weight: 64.5,
            height: 168.0,
            target_weight: 60.0,
            water_goal: 2.5,
            sleep_goal: 8.0,
            kcal_goal: 1800,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_input() {
        let pool = setup_test_pool().await;
        let id = create_profile(&pool, &sample_fields()).await.unwrap();
        assert_eq!(id, PROFILE_ROW_ID);

        let profile = get_profile(&pool).await.unwrap().unwrap();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.age, 28);
        assert_eq!(profile.weight, 64.5);
        assert_eq!(profile.height, 168.0);
        assert_eq!(profile.target_weight, 60.0);
        assert_eq!(profile.water_goal, 2.5);
        assert_eq!(profile.sleep_goal, 8.0);
        assert_eq!(profile.kcal_goal, 1800);
    }

    #[tokio::test]
    async fn test_zero_valued_goals_are_accepted() {
        let pool = setup_test_pool().await;
        let mut fields = sample_fields();
        fields.water_goal = 0.0;
        fields.sleep_goal = 0.0;
        fields.kcal_goal = 0;
        create_profile(&pool, &fields).await.unwrap();

        let profile = get_profile(&pool).await.unwrap().unwrap();
        assert_eq!(profile.water_goal, 0.0);
        assert_eq!(profile.kcal_goal, 0);
    }

    #[tokio::test]
    async fn test_second_create_conflicts() {
        let pool = setup_test_pool().await;
        create_profile(&pool, &sample_fields()).await.unwrap();

        let err = create_profile(&pool, &sample_fields()).await.unwrap_err();
        assert!(matches!(err, SqliteError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_get_without_profile_is_none() {
        let pool = setup_test_pool().await;
        assert!(get_profile(&pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let pool = setup_test_pool().await;
        let id = create_profile(&pool, &sample_fields()).await.unwrap();

        let mut fields = sample_fields();
        fields.weight = 63.0;
        fields.kcal_goal = 2000;
        assert!(update_profile(&pool, id, &fields).await.unwrap());

        let profile = get_profile(&pool).await.unwrap().unwrap();
        assert_eq!(profile.weight, 63.0);
        assert_eq!(profile.kcal_goal, 2000);
    }

    #[tokio::test]
    async fn test_update_unknown_id_affects_nothing() {
        let pool = setup_test_pool().await;
        create_profile(&pool, &sample_fields()).await.unwrap();
        assert!(!update_profile(&pool, 99, &sample_fields()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_profile() {
        let pool = setup_test_pool().await;
        let id = create_profile(&pool, &sample_fields()).await.unwrap();

        assert!(delete_profile(&pool, id).await.unwrap());
        assert!(get_profile(&pool).await.unwrap().is_none());
        assert!(!delete_profile(&pool, id).await.unwrap());
    }
}
