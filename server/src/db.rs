//! Pool construction and the one-shot schema migration.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const MIGRATION: &str = include_str!("../migrations/001_create_todos.sql");

pub const MEMORY_URL: &str = "sqlite::memory:";

/// Opens a pool for `url`.
///
/// An in-memory database lives only as long as its connection, so such URLs
/// get exactly one connection that is never recycled.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?;
    let pool = if is_memory(url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new().connect_with(options).await?
    };
    tracing::debug!(scheme = scheme(url), "database pool ready");
    Ok(pool)
}

/// Applies `001_create_todos.sql`. Safe to run more than once.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(MIGRATION).execute(pool).await?;
    tracing::info!("migration 001_create_todos applied");
    Ok(())
}

/// A fresh, migrated in-memory database.
pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = connect(MEMORY_URL).await?;
    migrate(&pool).await?;
    Ok(pool)
}

/// The part of `url` before the first `:`, safe to log.
fn scheme(url: &str) -> &str {
    url.split(':').next().unwrap_or_default()
}

fn is_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
