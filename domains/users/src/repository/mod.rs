//! Persistence for the users domain
//!
//! `PgUserRepository` is the production store; `mock::InMemoryUserRepository`
//! backs tests and local experiments.

pub mod mock;
pub mod users;

use async_trait::async_trait;
use jobboard_common::RepositoryError;

use crate::domain::entities::{NewUser, User, UserCredentials};

pub use users::PgUserRepository;

/// User store
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user. Fails with [`RepositoryError::AlreadyExists`] when the
    /// email is already taken.
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError>;

    /// Look up a user by email, including the stored password hash.
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError>;
}
