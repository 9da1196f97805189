//! API layer for the jobs domain
//!
//! Contains HTTP handlers, routes, and domain state definition.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::JobsState;
pub use routes::routes;
