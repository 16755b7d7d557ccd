use std::sync::Arc;

use axum::{http::Uri, Extension};
use percent_encoding::percent_decode_str;

use crate::{
    pipeline::SiteHandler,
    types::{SiteRequest, SiteResponse},
};

pub async fn handler(
    Extension(site_handler): Extension<Arc<SiteHandler>>,
    uri: Uri,
) -> SiteResponse {
    // Object keys are stored unescaped, so `/my%20page.html` names `my page.html`
    let path = percent_decode_str(uri.path()).decode_utf8_lossy();

    site_handler.handle(&SiteRequest::new(path)).await
}
