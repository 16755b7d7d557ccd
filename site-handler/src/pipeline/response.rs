//! Mapping fetched objects and fixed outcomes to responses

use std::collections::BTreeMap;

use axum::http::{HeaderValue, StatusCode};
use serde_json::json;

use crate::{
    site_storage::FetchedObject,
    types::{HandlerError, HandlerResult, SiteResponse},
};

/// `Content-Type` header name as emitted in responses
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// `ETag` header name as emitted in responses
pub const ETAG_HEADER: &str = "ETag";

/// Builds a 200 response from an object carrying body, content type and etag
///
/// The content type and etag are echoed verbatim as `Content-Type` and
/// `ETag`, so both must also be valid HTTP header values. An object that
/// cannot be answered with both headers intact is rejected rather than
/// served without them.
///
/// # Errors
///
/// Returns `HandlerError::Invocation` if any of the three fields is absent
/// or a metadata value cannot be sent as a header
pub fn from_object(object: FetchedObject) -> HandlerResult<SiteResponse> {
    let FetchedObject {
        body: Some(body),
        content_type: Some(content_type),
        etag: Some(etag),
    } = object
    else {
        return Err(unexpected_metadata());
    };

    if !is_header_value(&content_type) || !is_header_value(&etag) {
        return Err(unexpected_metadata());
    }

    Ok(SiteResponse {
        status_code: StatusCode::OK.as_u16(),
        headers: Some(BTreeMap::from([
            (CONTENT_TYPE_HEADER.to_string(), content_type),
            (ETAG_HEADER.to_string(), etag),
        ])),
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn unexpected_metadata() -> HandlerError {
    HandlerError::Invocation("Unexpected object metadata".to_string())
}

fn is_header_value(value: &str) -> bool {
    HeaderValue::from_str(value).is_ok()
}

/// Fixed 404 response
#[must_use]
pub fn not_found() -> SiteResponse {
    json_message(StatusCode::NOT_FOUND, "Not Found")
}

/// Fixed 500 response
#[must_use]
pub fn internal_error() -> SiteResponse {
    json_message(StatusCode::INTERNAL_SERVER_ERROR, "Internal lambda error")
}

fn json_message(status: StatusCode, message: &str) -> SiteResponse {
    SiteResponse {
        status_code: status.as_u16(),
        headers: Some(BTreeMap::from([(
            CONTENT_TYPE_HEADER.to_string(),
            mime::APPLICATION_JSON.to_string(),
        )])),
        body: json!({ "message": message }).to_string(),
    }
}
