//! Users domain: registration, login, credential storage

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use repository::{mock::InMemoryUserRepository, PgUserRepository, UserRepository};
pub use service::{AuthService, LoginRequest, RegisterRequest};

// Re-export API types
pub use api::routes;
pub use api::UsersState;
