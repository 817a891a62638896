//! User domain
//!
//! The user is resolved upstream; this module only parses the resolved
//! user info and carries it in the request-scoped context.

mod context;
mod entity;

pub use context::{ThreadContext, OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT};
pub use entity::User;
