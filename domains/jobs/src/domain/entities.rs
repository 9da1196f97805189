//! Domain entities for the jobs domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Job posting
///
/// `user_id` is exposed as `user` on the wire: it identifies the account
/// that posted the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub email: String,
    pub address: String,
    pub company: String,
    pub industry: Vec<String>,
    pub positions: i32,
    pub salary: f64,
    #[serde(rename = "user")]
    pub user_id: Uuid,
    pub posting_date: DateTime<Utc>,
}

/// Job about to be inserted
#[derive(Debug, Clone)]
pub struct NewJob {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub email: String,
    pub address: String,
    pub company: String,
    pub industry: Vec<String>,
    pub positions: i32,
    pub salary: f64,
    pub user_id: Uuid,
    pub posting_date: DateTime<Utc>,
}

impl NewJob {
    pub fn into_job(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            description: self.description,
            email: self.email,
            address: self.address,
            company: self.company,
            industry: self.industry,
            positions: self.positions,
            salary: self.salary,
            user_id: self.user_id,
            posting_date: self.posting_date,
        }
    }
}
