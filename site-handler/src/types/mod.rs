mod environment;
mod error;
mod request;

pub use environment::Environment;
pub use error::{HandlerError, HandlerResult};
pub use request::{SiteRequest, SiteResponse};
