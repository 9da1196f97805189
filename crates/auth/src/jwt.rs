//! JWT issuance, validation, and token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::claims::Claims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Sign a bearer token whose subject is `user_id`
pub fn issue_token(user_id: Uuid, config: &AuthConfig) -> Result<String, AuthError> {
    let now = chrono::Utc::now().timestamp() as u64;

    let claims = Claims {
        sub: user_id.to_string(),
        iat: now,
        exp: now + config.expires_in_secs,
        iss: config.issuer.clone(),
        aud: config.audience.clone(),
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());

    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, user_id = %user_id, "Failed to sign JWT");
        AuthError::TokenIssueFailed
    })
}

/// Validate a token issued by [`issue_token`]
pub fn validate_jwt_token(token: &str, config: &AuthConfig) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);

    if let Some(aud) = &config.audience {
        validation.set_audience(&[aud]);
    } else {
        validation.validate_aud = false;
    }

    if let Some(iss) = &config.issuer {
        validation.set_issuer(&[iss]);
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<Claims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    if let Some(token) = header_str.strip_prefix("Bearer ") {
        Ok(token.to_string())
    } else {
        Err(AuthError::InvalidAuthorizationFormat)
    }
}
