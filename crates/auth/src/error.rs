//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use jobboard_common::Error;
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidUserId,
    /// Signing a new token failed
    TokenIssueFailed,
    /// The password hasher failed (bad cost, corrupt stored hash, pool shutdown)
    HashingFailed,
}

impl AuthError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            AuthError::MissingAuthorization => {
                (StatusCode::UNAUTHORIZED, "Authorization header required")
            }
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
            AuthError::InvalidUserId => (StatusCode::UNAUTHORIZED, "Invalid user ID in token"),
            AuthError::TokenIssueFailed => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to issue token")
            }
            AuthError::HashingFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to process password",
            ),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.parts().1)
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err.parts() {
            (StatusCode::UNAUTHORIZED, message) => Error::Authentication(message.to_string()),
            (_, message) => Error::Internal(message.to_string()),
        }
    }
}
