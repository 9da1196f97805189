//! Authentication configuration

use jobboard_common::config::{Config, DEFAULT_JWT_EXPIRES_IN_SECS};

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub expires_in_secs: u64,
    pub issuer: Option<String>,
    pub audience: Option<String>,
}

impl AuthConfig {
    /// Config with the default lifetime and no issuer/audience checks
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            expires_in_secs: DEFAULT_JWT_EXPIRES_IN_SECS,
            issuer: None,
            audience: None,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            expires_in_secs: config.jwt_expires_in_secs,
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
        }
    }
}
