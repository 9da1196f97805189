//! Token backend shared by the auth service and the request extractors
//!
//! Domain states expose this via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{issue_token, validate_jwt_token};

/// Issues bearer tokens and turns presented tokens back into an identity.
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Create a signed token bound to `user_id`
    pub fn issue_token(&self, user_id: Uuid) -> Result<String, AuthError> {
        issue_token(user_id, &self.config)
    }

    /// Validate a bearer token and resolve the caller's identity
    pub fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;
        Ok(AuthContext::new(user_id))
    }
}
