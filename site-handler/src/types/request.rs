//! Request and response records exchanged with the invoking host

use std::collections::BTreeMap;

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Incoming request; only the path is read
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteRequest {
    /// Request path, leading `/` included
    pub path: String,
}

impl SiteRequest {
    /// Request for `path`
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// HTTP-shaped response produced once per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// Response body
    pub body: String,
}

impl IntoResponse for SiteResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        for (name, value) in self.headers.unwrap_or_default() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header: {name}"),
            }
        }

        response
    }
}
