mod health;
mod site;

use axum::{routing::get, Router};

/// Creates the router serving site content
///
/// Every path belongs to the site, so operational endpoints live on the
/// health router below and are bound to a separate port.
/// Expects an `Extension<Arc<SiteHandler>>` layer.
pub fn handler() -> Router {
    Router::new()
        .route("/", get(site::handler))
        .route("/{*path}", get(site::handler))
}

/// Creates the router for the health check listener
pub fn health() -> Router {
    Router::new().route("/health", get(health::handler))
}
