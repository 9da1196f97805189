//! Route definitions for the jobs domain API

use axum::{routing::get, Router};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new().route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
}
