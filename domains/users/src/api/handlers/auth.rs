//! Authentication API handlers
//!
//! Implements:
//! - POST /auth/register - Create an account and return a token
//! - POST /auth/login - Exchange email and password for a token

use axum::{extract::State, http::StatusCode, Json};
use jobboard_common::{Result, ValidatedJson};
use serde::Serialize;

use crate::api::middleware::UsersState;
use crate::service::{LoginRequest, RegisterRequest};

/// Response shape for both register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /auth/register
pub async fn register(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>)> {
    let token = state.auth_service().register(request).await?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// POST /auth/login
pub async fn login(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>> {
    let token = state.auth_service().login(request).await?;

    Ok(Json(TokenResponse { token }))
}
