//! Entity store for the HostelEase lifecycle engine.
//!
//! SQLite-backed via sqlx. `models` holds the row structs and DTOs,
//! `repositories` the zero-sized repos that take the pool (or a
//! transaction connection) as their first argument.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;

/// Connection pool alias used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Open (and create if missing) the database at `database_url`.
///
/// Foreign keys are enabled on every connection; menu sections cascade
/// to their items and resident deletion nulls out ledger references.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    tracing::info!(database_url, "database pool ready");
    Ok(pool)
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("migrations up to date");
    Ok(())
}

/// Cheap liveness probe used by the health endpoint and at startup.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
