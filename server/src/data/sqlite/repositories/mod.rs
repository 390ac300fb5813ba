//! SQLite repositories, one module per resource

pub mod date;
pub mod exercise;
pub mod metric;
pub mod profile;
pub mod workout;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    /// In-memory pool with the full schema applied
    pub async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        sqlx::query(crate::data::sqlite::schema::SCHEMA)
            .execute(&pool)
            .await
            .unwrap();
        pool
    }
}
