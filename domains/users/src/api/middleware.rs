//! Users domain state and auth backend integration

use axum::extract::FromRef;
use jobboard_auth::{AuthBackend, PasswordHasher};
use std::sync::Arc;

use crate::repository::UserRepository;
use crate::service::AuthService;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub auth: AuthBackend,
}

impl UsersState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        auth: AuthBackend,
    ) -> Self {
        Self {
            users,
            hasher,
            auth,
        }
    }

    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(self.users.as_ref(), self.hasher.as_ref(), &self.auth)
    }
}

impl FromRef<UsersState> for AuthBackend {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
