//! S3-backed object storage gateway
//!
//! The gateway performs exactly one `GetObject` per call. Fallback between
//! candidate keys is the pipeline's job, not the transport's.

mod error;

use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use tracing::debug;

pub use error::{StorageError, StorageResult, ACCESS_DENIED, BODY_READ_FAILURE, UNKNOWN_CODE};

/// Object returned by a successful fetch
///
/// Every field is optional from the gateway's point of view; the response
/// mapper decides whether the object is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedObject {
    /// Raw object bytes
    pub body: Option<Vec<u8>>,
    /// `Content-Type` stored with the object
    pub content_type: Option<String>,
    /// Entity tag, quotes included
    pub etag: Option<String>,
}

/// Read-only access to objects in a bucket
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetches the object stored under `key` in `bucket`
    ///
    /// Implementations make a single attempt and never retry against another
    /// key. A missing object must be reported as a `StorageError` whose code
    /// is [`ACCESS_DENIED`]; the pipeline relies on that code to decide
    /// between the index-document fallback and the 404 response.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the store cannot produce the object
    async fn fetch(&self, bucket: &str, key: &str) -> StorageResult<FetchedObject>;
}

/// Object store backed by the AWS S3 SDK
pub struct S3ObjectStore {
    s3_client: Arc<S3Client>,
}

impl S3ObjectStore {
    /// Creates a new S3 object store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait::async_trait]
impl ObjectStore for S3ObjectStore {
    async fn fetch(&self, bucket: &str, key: &str) -> StorageResult<FetchedObject> {
        // S3 cannot address an empty key, so the root path is reported as missing
        if key.is_empty() {
            return Err(StorageError::access_denied("Empty object key"));
        }

        debug!(bucket, key, "Fetching object");

        let output = self
            .s3_client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await?;

        let content_type = output.content_type().map(ToString::to_string);
        let etag = output.e_tag().map(ToString::to_string);
        let body = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::AwsError {
                code: BODY_READ_FAILURE.to_string(),
                message: e.to_string(),
            })?
            .to_vec();

        Ok(FetchedObject {
            body: Some(body),
            content_type,
            etag,
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! In-memory object store for tests

    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::{FetchedObject, ObjectStore, StorageError, StorageResult};

    /// Object store serving canned objects and failures
    ///
    /// Keys without a canned entry fail with `AccessDenied`, the same way S3
    /// answers for missing keys when the caller lacks `s3:ListBucket`.
    #[derive(Default)]
    pub struct MockObjectStore {
        objects: HashMap<String, FetchedObject>,
        failures: HashMap<String, String>,
        requests: Mutex<Vec<(String, String)>>,
    }

    impl MockObjectStore {
        /// Creates an empty store
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves `object` for `key`
        #[must_use]
        pub fn with_object(mut self, key: &str, object: FetchedObject) -> Self {
            self.objects.insert(key.to_string(), object);
            self
        }

        /// Fails fetches of `key` with a service error carrying `code`
        #[must_use]
        pub fn with_failure(mut self, key: &str, code: &str) -> Self {
            self.failures.insert(key.to_string(), code.to_string());
            self
        }

        /// Keys requested so far, in order
        ///
        /// # Panics
        ///
        /// Panics if the request log mutex is poisoned
        #[must_use]
        pub fn requested_keys(&self) -> Vec<String> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .iter()
                .map(|(_, key)| key.clone())
                .collect()
        }

        /// Buckets requested so far, in order
        ///
        /// # Panics
        ///
        /// Panics if the request log mutex is poisoned
        #[must_use]
        pub fn requested_buckets(&self) -> Vec<String> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .iter()
                .map(|(bucket, _)| bucket.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl ObjectStore for MockObjectStore {
        async fn fetch(&self, bucket: &str, key: &str) -> StorageResult<FetchedObject> {
            self.requests
                .lock()
                .expect("request log poisoned")
                .push((bucket.to_string(), key.to_string()));

            if let Some(code) = self.failures.get(key) {
                return Err(StorageError::ServiceError {
                    code: code.clone(),
                    message: format!("mock failure for {key}"),
                });
            }

            self.objects
                .get(key)
                .cloned()
                .ok_or_else(|| StorageError::access_denied(format!("no mock object for {key}")))
        }
    }
}
