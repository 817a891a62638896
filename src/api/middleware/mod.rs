//! API middleware components

pub mod logging;
pub mod user_context;

pub use logging::logging_middleware;
pub use user_context::user_context_middleware;
