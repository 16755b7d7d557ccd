use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Extension, Router};
use site_handler::{
    pipeline::{error_policy::mock::RecordingSink, SiteHandler},
    routes,
    site_storage::mock::MockObjectStore,
    types::{SiteRequest, SiteResponse},
};
use tower::ServiceExt;

pub const TEST_BUCKET: &str = "site-handler-test";

/// Setup test environment
pub fn setup_test_env() {
    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Handler wired to an in-memory store and a recording sink
pub struct TestContext {
    pub router: Router,
    pub health_router: Router,
    pub handler: Arc<SiteHandler>,
    pub store: Arc<MockObjectStore>,
    pub sink: Arc<RecordingSink>,
}

impl TestContext {
    pub fn new(store: MockObjectStore) -> Self {
        Self::with_bucket(store, Some(TEST_BUCKET))
    }

    pub fn with_bucket(store: MockObjectStore, bucket: Option<&str>) -> Self {
        setup_test_env();

        let store = Arc::new(store);
        let sink = Arc::new(RecordingSink::new());
        let handler = Arc::new(
            SiteHandler::new(store.clone(), bucket.map(ToString::to_string))
                .with_sink(sink.clone()),
        );

        let router = routes::handler().layer(Extension(handler.clone()));
        let health_router = routes::health();

        Self {
            router,
            health_router,
            handler,
            store,
            sink,
        }
    }

    pub async fn handle(&self, path: &str) -> SiteResponse {
        self.handler.handle(&SiteRequest::new(path)).await
    }

    pub async fn send_request(
        &self,
        method: &str,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method(method)
            .body(Body::empty())?;

        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_health_request(&self) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri("/health")
            .method("GET")
            .body(Body::empty())?;

        let response = self.health_router.clone().oneshot(request).await?;
        Ok(response)
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        self.send_request("GET", route).await
    }
}
