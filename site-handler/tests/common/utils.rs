use axum::response::Response;
use http_body_util::BodyExt;
use site_handler::site_storage::FetchedObject;

/// Object with every field the response mapper needs
pub fn text_object(content_type: &str, etag: &str, body: &str) -> FetchedObject {
    FetchedObject {
        body: Some(body.as_bytes().to_vec()),
        content_type: Some(content_type.to_string()),
        etag: Some(etag.to_string()),
    }
}

/// Directory placeholder object as created by the S3 console
pub fn directory_object() -> FetchedObject {
    text_object("application/x-directory", "\"d41d8cd98f00b204e9800998ecf8427e\"", "")
}

/// Read response body as a string
pub async fn read_body(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
