//! Primary fetch with a single index-document fallback

use tracing::debug;

use super::resolver::CandidateKeys;
use crate::{
    site_storage::{FetchedObject, ObjectStore},
    types::{HandlerError, HandlerResult},
};

/// Content type S3 consoles and sync tools give to directory placeholder objects
pub const DIRECTORY_CONTENT_TYPE: &str = "application/x-directory";

/// Fetches the primary key, retrying once with the secondary key when the
/// primary is missing or is a directory placeholder
///
/// The secondary outcome is returned as-is; there is never a third fetch.
///
/// # Errors
///
/// Returns the storage error of the last fetch performed
pub async fn fetch_with_fallback(
    store: &dyn ObjectStore,
    bucket: &str,
    keys: &CandidateKeys,
) -> HandlerResult<FetchedObject> {
    let primary = store
        .fetch(bucket, &keys.primary)
        .await
        .map_err(HandlerError::from);

    if !needs_fallback(&primary) {
        return primary;
    }

    debug!(
        primary = %keys.primary,
        secondary = %keys.secondary,
        "Falling back to index document"
    );

    store
        .fetch(bucket, &keys.secondary)
        .await
        .map_err(HandlerError::from)
}

fn needs_fallback(result: &HandlerResult<FetchedObject>) -> bool {
    match result {
        Ok(object) => is_directory(object),
        Err(err) => err.is_missing_object(),
    }
}

fn is_directory(object: &FetchedObject) -> bool {
    object.content_type.as_deref() == Some(DIRECTORY_CONTENT_TYPE)
}
