//! Jobs domain state and auth backend integration

use axum::extract::FromRef;
use jobboard_auth::AuthBackend;
use std::sync::Arc;

use crate::repository::JobRepository;
use crate::service::JobService;

/// Application state for the jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub jobs: Arc<dyn JobRepository>,
    pub auth: AuthBackend,
}

impl JobsState {
    pub fn new(jobs: Arc<dyn JobRepository>, auth: AuthBackend) -> Self {
        Self { jobs, auth }
    }

    pub fn job_service(&self) -> JobService<'_> {
        JobService::new(self.jobs.as_ref())
    }
}

impl FromRef<JobsState> for AuthBackend {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}
