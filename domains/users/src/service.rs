//! Registration and login
//!
//! The service borrows its collaborators from the domain state for the
//! duration of a request.

use jobboard_auth::{AuthBackend, PasswordHasher};
use jobboard_common::{Error, RepositoryError, Result};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::NewUser;
use crate::domain::validation::{
    is_valid_email, is_valid_password, present, MSG_DUPLICATE_EMAIL, MSG_INVALID_CREDENTIALS,
    MSG_INVALID_EMAIL, MSG_MISSING_LOGIN_FIELDS, MSG_MISSING_REGISTER_FIELDS,
    MSG_PASSWORD_TOO_SHORT,
};
use crate::repository::UserRepository;

/// Body of `POST /auth/register`. Fields are optional so that absence is
/// reported with the domain message instead of a deserialization error.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /auth/login`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct AuthService<'a> {
    users: &'a dyn UserRepository,
    hasher: &'a dyn PasswordHasher,
    tokens: &'a AuthBackend,
}

impl<'a> AuthService<'a> {
    pub fn new(
        users: &'a dyn UserRepository,
        hasher: &'a dyn PasswordHasher,
        tokens: &'a AuthBackend,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Create an account and return a bearer token for it
    pub async fn register(&self, req: RegisterRequest) -> Result<String> {
        let (Some(name), Some(email), Some(password)) = (
            present(req.name),
            present(req.email),
            present(req.password),
        ) else {
            return Err(Error::Validation(MSG_MISSING_REGISTER_FIELDS.to_string()));
        };

        if !is_valid_email(&email) {
            return Err(Error::Validation(MSG_INVALID_EMAIL.to_string()));
        }
        if !is_valid_password(&password) {
            return Err(Error::Validation(MSG_PASSWORD_TOO_SHORT.to_string()));
        }

        let password_hash = self.hasher.hash(&password).await?;

        let user = match self
            .users
            .create(&NewUser::new(name, email, password_hash))
            .await
        {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists) => {
                tracing::warn!("Registration rejected: email already registered");
                return Err(Error::Duplicate(MSG_DUPLICATE_EMAIL.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(user_id = %user.id, "User registered");

        Ok(self.tokens.issue_token(user.id)?)
    }

    /// Check credentials and return a bearer token.
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, req: LoginRequest) -> Result<String> {
        let (Some(email), Some(password)) = (present(req.email), present(req.password)) else {
            return Err(Error::Validation(MSG_MISSING_LOGIN_FIELDS.to_string()));
        };

        let Some(credentials) = self.users.find_credentials_by_email(&email).await? else {
            tracing::debug!("Login failed: unknown email");
            return Err(invalid_credentials());
        };

        if !self.hasher.verify(&password, &credentials.password).await? {
            tracing::debug!(user_id = %credentials.id, "Login failed: password mismatch");
            return Err(invalid_credentials());
        }

        tracing::info!(user_id = %credentials.id, "User logged in");

        Ok(self.tokens.issue_token(credentials.id)?)
    }
}

fn invalid_credentials() -> Error {
    Error::Authentication(MSG_INVALID_CREDENTIALS.to_string())
}
