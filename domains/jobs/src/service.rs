//! Job listing and creation

use chrono::Utc;
use jobboard_common::{ListQuery, Result};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Job, NewJob};
use crate::repository::JobRepository;

/// Body of `POST /jobs`
///
/// There is no owner field: the posting is always attributed to the
/// authenticated caller, and a `user` key in the body is discarded.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Job title must be between 1 and 100 characters"
    ))]
    pub title: String,

    #[validate(length(
        min = 1,
        max = 1000,
        message = "Job description must be between 1 and 1000 characters"
    ))]
    pub description: String,

    #[validate(email(message = "Please add a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Please add an address"))]
    pub address: String,

    #[validate(length(min = 1, message = "Please enter Company name"))]
    pub company: String,

    #[serde(default)]
    pub industry: Vec<String>,

    #[validate(range(min = 1, message = "Please enter number of positions"))]
    pub positions: i32,

    #[validate(range(min = 0.0, message = "Salary can not be negative"))]
    pub salary: f64,
}

impl CreateJobRequest {
    fn into_new_job(self, user_id: Uuid) -> NewJob {
        NewJob {
            id: Uuid::new_v4(),
            title: self.title,
            description: self.description,
            email: self.email,
            address: self.address,
            company: self.company,
            industry: self.industry,
            positions: self.positions,
            salary: self.salary,
            user_id,
            posting_date: Utc::now(),
        }
    }
}

pub struct JobService<'a> {
    jobs: &'a dyn JobRepository,
}

impl<'a> JobService<'a> {
    pub fn new(jobs: &'a dyn JobRepository) -> Self {
        Self { jobs }
    }

    /// One page of postings. An empty page is not an error.
    pub async fn list_jobs(&self, query: ListQuery) -> Result<Vec<Job>> {
        let jobs = self.jobs.list(&query).await?;

        tracing::debug!(
            page = query.page(),
            page_size = query.limit(),
            count = jobs.len(),
            "Listed jobs"
        );

        Ok(jobs)
    }

    /// Persist a posting owned by `user_id`. The request is expected to have
    /// passed validation already.
    pub async fn create_job(&self, request: CreateJobRequest, user_id: Uuid) -> Result<Job> {
        let job = self.jobs.create(&request.into_new_job(user_id)).await?;

        tracing::info!(job_id = %job.id, user_id = %user_id, "Job created");

        Ok(job)
    }
}
