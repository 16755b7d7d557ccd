//! Static site handler serving S3 objects with static file server path semantics

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Request pipeline
pub mod pipeline;

/// HTTP routes
pub mod routes;

/// HTTP server
pub mod server;

/// Object storage gateway
pub mod site_storage;

/// Request, response, error and configuration types
pub mod types;
