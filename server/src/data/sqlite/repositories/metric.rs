//! Daily metric repository for SQLite operations
//!
//! Calories, water, and sleep share one shape: a single measurement per
//! date, written with insert-or-update semantics keyed on the unique
//! `date_id`. One generic implementation serves all three tables; the
//! value type stays `i64` for calories and `f64` for liters/hours.

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteRow;

use crate::data::sqlite::SqliteError;
use crate::data::sqlite::error::is_foreign_key_violation;
use crate::data::types::MetricRow;

/// The three per-day metric tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Calories,
    Water,
    Sleep,
}

impl MetricKind {
    pub const fn table(&self) -> &'static str {
        match self {
            MetricKind::Calories => "kcal",
            MetricKind::Water => "water",
            MetricKind::Sleep => "sleep",
        }
    }

    pub const fn value_column(&self) -> &'static str {
        match self {
            MetricKind::Calories => "calories",
            MetricKind::Water => "liters",
            MetricKind::Sleep => "hours",
        }
    }

    pub const fn not_found_message(&self) -> &'static str {
        match self {
            MetricKind::Calories => "No calories logged for this date",
            MetricKind::Water => "No water intake logged for this date",
            MetricKind::Sleep => "No sleep hours logged for this date",
        }
    }
}

/// Insert or overwrite the metric value for a date.
///
/// At most one row survives per date; a second submission replaces the
/// stored value in place. Fails with `Conflict` when the date id does
/// not exist.
pub async fn upsert<V>(
    pool: &SqlitePool,
    kind: MetricKind,
    date_id: i64,
    value: V,
) -> Result<(), SqliteError>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + 'static,
{
    let now = chrono::Utc::now().timestamp();
    let sql = format!(
        "INSERT INTO {table} (date_id, {col}, updated_at) VALUES (?, ?, ?) \
         ON CONFLICT(date_id) DO UPDATE SET {col} = excluded.{col}, updated_at = excluded.updated_at",
        table = kind.table(),
        col = kind.value_column(),
    );

    let result = sqlx::query(&sql)
        .bind(date_id)
        .bind(value)
        .bind(now)
        .execute(pool)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if is_foreign_key_violation(&e) => {
            Err(SqliteError::Conflict("unknown date_id".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Resolve-or-create a date by its text key and upsert the metric for it,
/// inside one transaction so the two writes land atomically.
pub async fn upsert_for_date<V>(
    pool: &SqlitePool,
    kind: MetricKind,
    date_text: &str,
    value: V,
) -> Result<i64, SqliteError>
where
    V: for<'q> sqlx::Encode<'q, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite> + Send + 'static,
{
    let now = chrono::Utc::now().timestamp();
    let mut tx = pool.begin().await?;

    let date_id: i64 = sqlx::query_scalar(
        "INSERT INTO dates (date, created_at) VALUES (?, ?) \
         ON CONFLICT(date) DO UPDATE SET date = excluded.date \
         RETURNING id",
    )
    .bind(date_text)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    let sql = format!(
        "INSERT INTO {table} (date_id, {col}, updated_at) VALUES (?, ?, ?) \
         ON CONFLICT(date_id) DO UPDATE SET {col} = excluded.{col}, updated_at = excluded.updated_at",
        table = kind.table(),
        col = kind.value_column(),
    );
    sqlx::query(&sql)
        .bind(date_id)
        .bind(value)
        .bind(now)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(date_id)
}

/// Single-row fetch of the metric for one date
pub async fn get_by_date<V>(
    pool: &SqlitePool,
    kind: MetricKind,
    date_id: i64,
) -> Result<Option<MetricRow<V>>, SqliteError>
where
    V: Send + Unpin + 'static,
    for<'r> (i64, i64, V): sqlx::FromRow<'r, SqliteRow>,
{
    let sql = format!(
        "SELECT id, date_id, {col} FROM {table} WHERE date_id = ?",
        table = kind.table(),
        col = kind.value_column(),
    );

    let row: Option<(i64, i64, V)> = sqlx::query_as(&sql)
        .bind(date_id)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|(id, date_id, value)| MetricRow { id, date_id, value }))
}

/// All rows across all dates, natural storage order
pub async fn list_all<V>(
    pool: &SqlitePool,
    kind: MetricKind,
) -> Result<Vec<MetricRow<V>>, SqliteError>
where
    V: Send + Unpin + 'static,
    for<'r> (i64, i64, V): sqlx::FromRow<'r, SqliteRow>,
{
    let sql = format!(
        "SELECT id, date_id, {col} FROM {table}",
        table = kind.table(),
        col = kind.value_column(),
    );

    let rows: Vec<(i64, i64, V)> = sqlx::query_as(&sql).fetch_all(pool).await?;

    Ok(rows
        .into_iter()
        .map(|(id, date_id, value)| MetricRow { id, date_id, value })
        .collect())
}

/// The (at most one) row for a date, kept as a list for the wire contract
pub async fn list_by_date<V>(
    pool: &SqlitePool,
    kind: MetricKind,
    date_id: i64,
) -> Result<Vec<MetricRow<V>>, SqliteError>
where
    V: Send + Unpin + 'static,
    for<'r> (i64, i64, V): sqlx::FromRow<'r, SqliteRow>,
{
    let sql = format!(
        "SELECT id, date_id, {col} FROM {table} WHERE date_id = ?",
        table = kind.table(),
        col = kind.value_column(),
    );

    let rows: Vec<(i64, i64, V)> = sqlx::query_as(&sql)
        .bind(date_id)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, date_id, value)| MetricRow { id, date_id, value })
        .collect())
}
