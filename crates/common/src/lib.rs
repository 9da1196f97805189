//! Shared configuration, database lifecycle, and error handling for Jobboard
//!
//! This crate provides common functionality used across the Jobboard application:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Connection pool setup and teardown
//! - Request extractors (validated JSON, pagination)

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{ListQuery, QueryParams, ValidatedJson};
