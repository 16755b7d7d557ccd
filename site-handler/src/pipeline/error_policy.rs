//! Terminal error handling: not-found translation, diagnostic logging, 500 fallback

use tracing::error;

use super::response;
use crate::types::{HandlerError, HandlerResult, SiteResponse};

/// Destination for errors that reach the end of the pipeline
pub trait DiagnosticSink: Send + Sync {
    /// Records `error`; must not fail or alter it
    fn write(&self, error: &HandlerError);
}

/// Sink writing errors as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn write(&self, error: &HandlerError) {
        error!(kind = error.kind(), error = %error, "Request failed");
    }
}

/// Replaces a missing-object error with the fixed 404 response
pub fn translate_not_found(result: HandlerResult<SiteResponse>) -> HandlerResult<SiteResponse> {
    match result {
        Err(err) if err.is_missing_object() => Ok(response::not_found()),
        other => other,
    }
}

/// Writes any error to `sink` and hands the result back unchanged
pub fn log_error(
    result: HandlerResult<SiteResponse>,
    sink: &dyn DiagnosticSink,
) -> HandlerResult<SiteResponse> {
    if let Err(err) = &result {
        sink.write(err);
    }
    result
}

/// Collapses whatever error is left into the fixed 500 response
#[must_use]
pub fn into_response(result: HandlerResult<SiteResponse>) -> SiteResponse {
    result.unwrap_or_else(|_| response::internal_error())
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Sink capturing errors for assertions

    use std::sync::Mutex;

    use super::DiagnosticSink;
    use crate::types::HandlerError;

    /// Sink keeping every error it receives
    #[derive(Debug, Default)]
    pub struct RecordingSink {
        errors: Mutex<Vec<HandlerError>>,
    }

    impl RecordingSink {
        /// Creates an empty sink
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Errors written so far
        ///
        /// # Panics
        ///
        /// Panics if the error log mutex is poisoned
        #[must_use]
        pub fn errors(&self) -> Vec<HandlerError> {
            self.errors.lock().expect("error log poisoned").clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn write(&self, error: &HandlerError) {
            self.errors
                .lock()
                .expect("error log poisoned")
                .push(error.clone());
        }
    }
}
