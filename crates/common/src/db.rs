//! Shared database types and connection lifecycle for Jobboard
//!
//! The pool is created once at startup with [`connect`], handed to domain
//! repositories by value, and released with [`close`] at shutdown.

use crate::config::Config;
use crate::error::Error;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    /// A unique index rejected the write
    #[error("Record already exists")]
    AlreadyExists,

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NotFound,
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepositoryError::AlreadyExists
            }
            other => RepositoryError::Connection(other),
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Duplicate("Record already exists".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
        }
    }
}

/// Open the process-wide connection pool.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    tracing::info!(
        max_connections = config.database_max_connections,
        "Database pool opened"
    );
    Ok(pool)
}

/// Apply the embedded schema migrations.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Close the pool, waiting for checked-out connections to be returned.
pub async fn close(pool: &PgPool) {
    pool.close().await;
    tracing::info!("Database pool closed");
}
