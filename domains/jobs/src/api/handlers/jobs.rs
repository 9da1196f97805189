//! Job API handlers
//!
//! Implements:
//! - GET /jobs - List job postings, one page at a time
//! - POST /jobs - Create a posting owned by the caller

use axum::{extract::State, Json};
use jobboard_auth::AuthUser;
use jobboard_common::{ListQuery, QueryParams, Result, ValidatedJson};
use serde::Serialize;

use crate::api::middleware::JobsState;
use crate::domain::entities::Job;
use crate::service::CreateJobRequest;

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobResponse {
    pub job: Job,
}

/// GET /jobs
pub async fn list_jobs(
    State(state): State<JobsState>,
    QueryParams(params): QueryParams<ListQuery>,
) -> Result<Json<JobListResponse>> {
    let jobs = state.job_service().list_jobs(params).await?;

    Ok(Json(JobListResponse { jobs }))
}

/// POST /jobs
pub async fn create_job(
    AuthUser(auth_context): AuthUser,
    State(state): State<JobsState>,
    ValidatedJson(request): ValidatedJson<CreateJobRequest>,
) -> Result<Json<JobResponse>> {
    let job = state
        .job_service()
        .create_job(request, auth_context.user_id)
        .await?;

    Ok(Json(JobResponse { job }))
}
