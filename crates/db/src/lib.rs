//! Persistence layer: pool construction, migrations, models, repositories,
//! and the idempotent startup seed routine.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod seed;

pub type DbPool = sqlx::PgPool;

/// Default page size applied when a list request omits `limit`.
pub const DEFAULT_LIMIT: i64 = 100;
/// Hard cap on page size regardless of what the client asks for.
pub const MAX_LIMIT: i64 = 500;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used by the health endpoint and at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Clamp a client-supplied limit to `1..=MAX_LIMIT`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a client-supplied skip/offset to be non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_caps() {
        assert_eq!(clamp_limit(None), DEFAULT_LIMIT);
        assert_eq!(clamp_limit(Some(10)), 10);
        assert_eq!(clamp_limit(Some(0)), 1);
        assert_eq!(clamp_limit(Some(-5)), 1);
        assert_eq!(clamp_limit(Some(100_000)), MAX_LIMIT);
    }

    #[test]
    fn skip_is_never_negative() {
        assert_eq!(clamp_skip(None), 0);
        assert_eq!(clamp_skip(Some(40)), 40);
        assert_eq!(clamp_skip(Some(-1)), 0);
    }
}
