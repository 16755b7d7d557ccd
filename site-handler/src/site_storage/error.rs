//! Error types for object storage operations

use aws_sdk_s3::{
    error::{ProvideErrorMetadata, SdkError},
    operation::get_object::GetObjectError,
};
use thiserror::Error;

/// Error code S3 returns when an object is missing and the caller cannot list the bucket
pub const ACCESS_DENIED: &str = "AccessDenied";

/// Code used when the SDK gives no better classification
pub const UNKNOWN_CODE: &str = "Unknown";

/// Code used when the object body stream breaks mid-read
pub const BODY_READ_FAILURE: &str = "BodyReadFailure";

/// Result type for object storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while fetching an object
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// S3 answered with an error response
    #[error("S3 service error {code}: {message}")]
    ServiceError {
        /// S3 error code, e.g. `AccessDenied` or `NoSuchKey`
        code: String,
        /// Message attached to the error response
        message: String,
    },

    /// The request never produced a service response
    #[error("AWS SDK error {code}: {message}")]
    AwsError {
        /// Failure class, e.g. `DispatchFailure` or `TimeoutError`
        code: String,
        /// SDK error description
        message: String,
    },
}

impl StorageError {
    /// Builds the error used for keys that cannot hold an object
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::ServiceError {
            code: ACCESS_DENIED.to_string(),
            message: message.into(),
        }
    }

    /// Error code
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::ServiceError { code, .. } | Self::AwsError { code, .. } => code,
        }
    }
}

impl From<SdkError<GetObjectError>> for StorageError {
    fn from(error: SdkError<GetObjectError>) -> Self {
        let code = match &error {
            SdkError::ServiceError(service_err) => {
                let err = service_err.err();
                return Self::ServiceError {
                    code: err.code().unwrap_or(UNKNOWN_CODE).to_string(),
                    message: err.message().unwrap_or_default().to_string(),
                };
            }
            SdkError::ConstructionFailure(_) => "ConstructionFailure",
            SdkError::TimeoutError(_) => "TimeoutError",
            SdkError::DispatchFailure(_) => "DispatchFailure",
            SdkError::ResponseError(_) => "ResponseError",
            _ => UNKNOWN_CODE,
        };

        Self::AwsError {
            code: code.to_string(),
            message: error.to_string(),
        }
    }
}
