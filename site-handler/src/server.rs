use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Extension, Router};
use datadog_tracing::axum::{OtelAxumLayer, OtelInResponseLayer};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::{pipeline::SiteHandler, routes};

/// Builds the fully layered site router
///
/// No request timeout is applied here. Slow storage is bounded by the S3
/// client's operation timeout, which surfaces as a logged 500.
pub fn router(site_handler: Arc<SiteHandler>) -> Router {
    routes::handler()
        .layer(Extension(site_handler))
        // Include trace context as header into the response
        .layer(OtelInResponseLayer)
        // Start OpenTelemetry trace on incoming request
        .layer(OtelAxumLayer::default())
}

/// Starts the site listener on `PORT` (default 8001) and the health check
/// listener on `HEALTH_PORT` (default 8002)
///
/// Both stop when `shutdown_token` is cancelled.
///
/// # Errors
///
/// Returns an error if either port is invalid, cannot be bound, or a server fails
pub async fn start(
    site_handler: Arc<SiteHandler>,
    shutdown_token: CancellationToken,
) -> anyhow::Result<()> {
    let site_addr = listen_addr("PORT", 8001)?;
    let health_addr = listen_addr("HEALTH_PORT", 8002)?;

    let site_listener = TcpListener::bind(site_addr).await?;
    let health_listener = TcpListener::bind(health_addr).await?;
    info!("Site handler started on http://{site_addr}, health check on http://{health_addr}");

    let site_token = shutdown_token.clone();
    let site_server = axum::serve(site_listener, router(site_handler).into_make_service())
        .with_graceful_shutdown(async move { site_token.cancelled().await });

    let health_server = axum::serve(health_listener, routes::health().into_make_service())
        .with_graceful_shutdown(async move { shutdown_token.cancelled().await });

    tokio::try_join!(async { site_server.await }, async { health_server.await })?;

    Ok(())
}

fn listen_addr(var: &str, default_port: u16) -> anyhow::Result<SocketAddr> {
    let port = std::env::var(var).map_or(Ok(default_port), |p| p.parse())?;
    Ok(SocketAddr::from(([0, 0, 0, 0], port)))
}
