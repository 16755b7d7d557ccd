//! Request pipeline resolving a path to exactly one response
//!
//! Stages run in order: key resolution, primary fetch with at most one
//! fallback fetch, response mapping, then the error policy.

pub mod error_policy;
pub mod interpreter;
pub mod resolver;
pub mod response;

use std::sync::Arc;

use tracing::instrument;

pub use error_policy::{DiagnosticSink, TracingSink};
pub use resolver::{CandidateKeys, INDEX_DOCUMENT};

use crate::{
    site_storage::ObjectStore,
    types::{HandlerError, HandlerResult, SiteRequest, SiteResponse},
};

/// Serves site content from one bucket
pub struct SiteHandler {
    store: Arc<dyn ObjectStore>,
    bucket: Option<String>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SiteHandler {
    /// Creates a handler logging failures through `tracing`
    ///
    /// # Arguments
    ///
    /// * `store` - Object store to fetch from
    /// * `bucket` - Bucket holding the site; `None` fails every request with a 500
    #[must_use]
    pub fn new(store: Arc<dyn ObjectStore>, bucket: Option<String>) -> Self {
        Self {
            store,
            bucket,
            sink: Arc::new(TracingSink),
        }
    }

    /// Swaps the sink
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Produces the response for `request`
    ///
    /// This never fails. Missing objects come back as the JSON 404, and
    /// every other failure is written to the diagnostic sink once and comes
    /// back as the JSON 500. At most two storage fetches are made, strictly
    /// one after the other.
    #[instrument(skip(self, request), fields(path = %request.path))]
    pub async fn handle(&self, request: &SiteRequest) -> SiteResponse {
        let result = self.resolve_and_fetch(request).await;
        let result = error_policy::translate_not_found(result);
        let result = error_policy::log_error(result, self.sink.as_ref());
        error_policy::into_response(result)
    }

    async fn resolve_and_fetch(&self, request: &SiteRequest) -> HandlerResult<SiteResponse> {
        let bucket = self
            .bucket
            .as_deref()
            .ok_or_else(|| HandlerError::Invocation("S3 bucket is not configured".to_string()))?;

        let keys = CandidateKeys::resolve(&request.path);
        let object = interpreter::fetch_with_fallback(self.store.as_ref(), bucket, &keys).await?;

        response::from_object(object)
    }
}
