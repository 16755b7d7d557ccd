//! Errors flowing through the request pipeline

use thiserror::Error;

use crate::site_storage::{StorageError, ACCESS_DENIED};

/// Result type for pipeline stages
pub type HandlerResult<T> = Result<T, HandlerError>;

/// Terminal error of a pipeline stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// Failure reported by the object store
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Internal contract violation, such as missing configuration or object metadata
    #[error("Invocation error: {0}")]
    Invocation(String),
}

impl HandlerError {
    /// Whether the error means "no object at this key"
    ///
    /// S3 reports `AccessDenied` rather than `NoSuchKey` for missing keys when
    /// the caller cannot list the bucket, so that code is read as missing. A
    /// genuine permission failure is indistinguishable and is treated the same.
    #[must_use]
    pub fn is_missing_object(&self) -> bool {
        matches!(self, Self::Storage(err) if err.code() == ACCESS_DENIED)
    }

    /// Short label for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Storage(_) => "storage",
            Self::Invocation(_) => "invocation",
        }
    }
}
