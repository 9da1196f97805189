//! In-memory user store
//!
//! Mirrors the unique index on `users.email` so duplicate registrations fail
//! the same way they do against PostgreSQL.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobboard_common::RepositoryError;

use super::UserRepository;
use crate::domain::entities::{NewUser, User, UserCredentials};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<UserCredentials>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored password hash for `email`, if the user exists
    pub fn stored_password(&self, email: &str) -> Option<String> {
        self.lock()
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.password.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UserCredentials>> {
        // A poisoned lock only means another test thread panicked mid-push
        self.users.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let mut users = self.lock();
        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::AlreadyExists);
        }

        let stored = UserCredentials {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password_hash.clone(),
            created_at: user.created_at,
        };
        users.push(stored.clone());
        Ok(stored.into_user())
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, RepositoryError> {
        Ok(self.lock().iter().find(|u| u.email == email).cloned())
    }
}
