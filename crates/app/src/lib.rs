//! Jobboard application composition root
//!
//! Composes the domain routers into a single application.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use jobboard_auth::{AuthBackend, AuthConfig, BcryptHasher};
use jobboard_common::Config;
use jobboard_jobs::{JobsState, PgJobRepository};
use jobboard_users::{PgUserRepository, UsersState};
use sqlx::PgPool;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router backed by PostgreSQL
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    let users_state = UsersState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(BcryptHasher::default()),
        auth.clone(),
    );
    let jobs_state = JobsState::new(Arc::new(PgJobRepository::new(pool)), auth);

    build_router(users_state, jobs_state)
}

/// Compose domain routers with shared infrastructure routes
pub fn build_router(users_state: UsersState, jobs_state: JobsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(jobboard_users::routes().with_state(users_state))
        .merge(jobboard_jobs::routes().with_state(jobs_state))
}

/// CORS layer restricted to a comma-separated list of origins.
///
/// Entries that are not valid header values are skipped.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Wrap the router in the shared HTTP middleware.
///
/// The body limit is outermost: CORS needs a `Default` response body from
/// the service it wraps, which the limit's response body does not provide.
pub fn with_middleware(app: Router, cors: CorsLayer) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(body_limit_layer())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
