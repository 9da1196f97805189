//! Route definitions for the users domain API

use axum::{routing::post, Router};

use super::handlers::auth;
use super::middleware::UsersState;

/// Create registration and login routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
}
