//! Jobs domain: job postings and listing

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use repository::{mock::InMemoryJobRepository, JobRepository, PgJobRepository};
pub use service::{CreateJobRequest, JobService};

pub use api::routes;
pub use api::JobsState;
