//! Identity of the caller behind a validated bearer token

use uuid::Uuid;

/// Represents an authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
}

impl AuthContext {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }
}
