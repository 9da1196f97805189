//! Persistence for the jobs domain

pub mod jobs;
pub mod mock;

use async_trait::async_trait;
use jobboard_common::{ListQuery, RepositoryError};

use crate::domain::entities::{Job, NewJob};

pub use jobs::PgJobRepository;

/// Job store
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// One page of jobs, newest first
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, RepositoryError>;

    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError>;
}
