//! Authentication primitives for the Jobboard API
//!
//! Provides bcrypt password hashing, JWT issuance and validation, and an
//! axum extractor that works with any domain state implementing
//! `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod password;

pub use backend::AuthBackend;
pub use claims::Claims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::AuthUser;
pub use jwt::{issue_token, validate_jwt_token};
pub use password::{BcryptHasher, PasswordHasher};
