//! One-way password hashing
//!
//! Hashing is CPU-bound, so the bcrypt work runs on tokio's blocking pool.

use async_trait::async_trait;

use crate::error::AuthError;

/// Credential hasher used by registration and login
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted one-way hash of `password`
    async fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Check `password` against a hash produced by [`PasswordHasher::hash`]
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// bcrypt-backed [`PasswordHasher`]
#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub const DEFAULT_COST: u32 = 10;

    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COST)
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash(&self, password: &str) -> Result<String, AuthError> {
        let password = password.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing task failed");
                AuthError::HashingFailed
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt hash failed");
                AuthError::HashingFailed
            })
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Password verification task failed");
                AuthError::HashingFailed
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "bcrypt verify failed");
                AuthError::HashingFailed
            })
    }
}
