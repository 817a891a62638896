//! Remote action transport

mod http_executor;

pub use http_executor::HttpActionExecutor;
