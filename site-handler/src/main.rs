use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use datadog_tracing::axum::shutdown_signal;

use site_handler::{
    pipeline::SiteHandler, server, site_storage::S3ObjectStore, types::Environment,
};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();

    // JSON logs for staging/production (Datadog), plain text for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt().json().with_env_filter(env_filter).init();
        }
        Environment::Development => {
            fmt().with_env_filter(env_filter).init();
        }
    }

    let bucket = Environment::s3_bucket();
    match &bucket {
        Some(bucket) => info!("Serving site from bucket {bucket} in {environment:?}"),
        None => warn!("S3_BUCKET_NAME is not set, every request will fail"),
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let site_handler = Arc::new(SiteHandler::new(
        Arc::new(S3ObjectStore::new(s3_client)),
        bucket,
    ));

    // Single shutdown token for both listeners
    let shutdown_token = CancellationToken::new();
    let signal_token = shutdown_token.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutting down site handler...");
        signal_token.cancel();
    });

    server::start(site_handler, shutdown_token).await
}
