//! Date registry repository for SQLite operations
//!
//! Every per-day record hangs off a row here via a cascade-delete foreign
//! key, so deleting a date wipes that day's metrics and workouts with it.

use sqlx::SqlitePool;

use crate::data::sqlite::SqliteError;
use crate::data::types::DateRow;

/// Fetch-or-create the registry row for a calendar day.
///
/// A single upsert statement, so two concurrent calls for the same day
/// cannot race into an insert-then-lookup gap. The no-op DO UPDATE makes
/// RETURNING yield the existing id on conflict.
pub async fn resolve_or_create(pool: &SqlitePool, date: &str) -> Result<i64, SqliteError> {
    let now = chrono::Utc::now().timestamp();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO dates (date, created_at) VALUES (?, ?) \
         ON CONFLICT(date) DO UPDATE SET date = excluded.date \
         RETURNING id",
    )
    .bind(date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Exact-match lookup of a calendar day
pub async fn lookup(pool: &SqlitePool, date: &str) -> Result<Option<DateRow>, SqliteError> {
    let row = sqlx::query_as::<_, (i64, String)>("SELECT id, date FROM dates WHERE date = ?")
        .bind(date)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(id, date)| DateRow { id, date }))
}

/// Delete a date by id, cascading to its metric and workout rows.
///
/// Returns false when no row matched the id.
pub async fn delete_date(pool: &SqlitePool, id: i64) -> Result<bool, SqliteError> {
    let result = sqlx::query("DELETE FROM dates WHERE id = ?")
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
    async fn test_resolve_or_create_is_idempotent() {
        let pool = setup_test_pool().await;

        let first = resolve_or_create(&pool, "2025-03-14").await.unwrap();
        let second = resolve_or_create(&pool, "2025-03-14").await.unwrap();
        assert_eq!(first, second);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM dates")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_distinct_dates_get_distinct_ids() {
        let pool = setup_test_pool().await;

        let a = resolve_or_create(&pool, "2025-03-14").await.unwrap();
        let b = resolve_or_create(&pool, "2025-03-15").await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_lookup() {
        let pool = setup_test_pool().await;
        let id = resolve_or_create(&pool, "2025-03-14").await.unwrap();

        let row = lookup(&pool, "2025-03-14").await.unwrap().unwrap();
        assert_eq!(row.id, id);
        assert_eq!(row.date, "2025-03-14");

        assert!(lookup(&pool, "2025-03-15").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_date() {
        let pool = setup_test_pool().await;
        let id = resolve_or_create(&pool, "2025-03-14").await.unwrap();

        assert!(delete_date(&pool, id).await.unwrap());
        assert!(lookup(&pool, "2025-03-14").await.unwrap().is_none());
        assert!(!delete_date(&pool, id).await.unwrap());
    }
}
