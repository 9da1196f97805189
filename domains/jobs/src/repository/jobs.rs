//! Job repository

use async_trait::async_trait;
use jobboard_common::{ListQuery, RepositoryError};
use sqlx::PgPool;

use super::JobRepository;
use crate::domain::entities::{Job, NewJob};

#[derive(Clone)]
pub struct PgJobRepository {
    pool: PgPool,
}

impl PgJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn list(&self, query: &ListQuery) -> Result<Vec<Job>, RepositoryError> {
        let rows = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, description, email, address, company, industry,
                   positions, salary, user_id, posting_date
            FROM jobs
            ORDER BY posting_date DESC, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, job: &NewJob) -> Result<Job, RepositoryError> {
        let row = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (id, title, description, email, address, company, industry,
                              positions, salary, user_id, posting_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, title, description, email, address, company, industry,
                      positions, salary, user_id, posting_date
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.email)
        .bind(&job.address)
        .bind(&job.company)
        .bind(&job.industry)
        .bind(job.positions)
        .bind(job.salary)
        .bind(job.user_id)
        .bind(job.posting_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
