//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables. A `config.env`
//! or `.env` file in the working directory is read first when present.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Default token lifetime: 7 days
pub const DEFAULT_JWT_EXPIRES_IN_SECS: u64 = 7 * 24 * 60 * 60;

/// Default size of the database connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,
    pub database_max_connections: u32,

    /// Token signing
    pub jwt_secret: String,
    pub jwt_expires_in_secs: u64,
    pub jwt_issuer: Option<String>,
    pub jwt_audience: Option<String>,

    /// Comma-separated list of allowed CORS origins
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::from_filename("config.env").ok();
        dotenvy::dotenv().ok();

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            ),

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_expires_in_secs: parse_or("JWT_EXPIRES_IN_SECS", DEFAULT_JWT_EXPIRES_IN_SECS),
            jwt_issuer: env::var("JWT_ISSUER").ok(),
            jwt_audience: env::var("JWT_AUDIENCE").ok(),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS").ok(),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "jobboard=debug".to_string()),
            port: parse_or("PORT", 3000),
        };

        Ok(config)
    }
}

/// Read and parse an environment variable, falling back to `default` when it
/// is missing or malformed.
fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
