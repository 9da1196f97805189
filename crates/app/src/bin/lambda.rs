//! Jobboard API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tracing::info;
use tracing_subscriber::EnvFilter;

use jobboard_app::{build_cors_layer, create_app, with_middleware};
use jobboard_common::{db, Config};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .json()
        .without_time()
        .init();

    info!("Initializing Jobboard API Lambda");

    let pool = db::connect(&config)
        .await
        .map_err(|e| Error::from(format!("Database error: {}", e)))?;

    info!("Database connection established");

    let cors_origins = config
        .cors_allowed_origins
        .clone()
        .ok_or_else(|| Error::from("CORS_ALLOWED_ORIGINS environment variable is required"))?;

    let app = with_middleware(create_app(&config, pool), build_cors_layer(&cors_origins));

    info!("Jobboard API Lambda ready to serve requests");

    run(app).await
}
