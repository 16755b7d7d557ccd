use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint
///
/// Returns the current status and version information of the service.
/// The check does not touch the bucket, so it stays green while S3 is
/// unreachable; storage failures show up as 500s on the site listener.
pub async fn handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "site-handler",
            "semver": env!("CARGO_PKG_VERSION"),
            "rev": option_env!("GIT_REV"),
        })),
    )
}
