//! In-memory job store

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobboard_common::{ListQuery, RepositoryError};

use super::JobRepository;
use crate::domain::entities::{Job, NewJob};

#[derive(Clone, Default)]
pub struct InMemoryJobRepository {
    jobs: Arc<Mutex<Vec<Job>>>,
}

impl InMemoryJobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Job>> {
        self.jobs.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, RepositoryError> {
        let mut jobs = self.lock().clone();
        jobs.sort_by(|a, b| {
            b.posting_date
                .cmp(&a.posting_date)
                .then_with(|| a.id.cmp(&b.id))
        });

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(query.limit()).unwrap_or(0);

        Ok(jobs.into_iter().skip(offset).take(limit).collect())
    }

    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let mut jobs = self.lock();
        if jobs.iter().any(|j| j.id == job.id) {
            return Err(RepositoryError::AlreadyExists);
        }

        let stored = job.clone().into_job();
        jobs.push(stored.clone());
        Ok(stored)
    }
}
