//! Persistence layer for the Critica review platform.
//!
//! Exposes the connection pool, embedded migrations, per-entity models, and
//! zero-sized repository structs with async CRUD methods. Field validation
//! lives in `critica-core` and is applied by the repositories before any row
//! is written, so malformed input surfaces as [`DbError::Core`] rather than
//! a database error.

pub mod config;
pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use config::DbConfig;
pub use error::{DbError, DbResult};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the given configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );
    Ok(pool)
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::info!("Database migrations applied");
    Ok(())
}
