//! REST request abstraction and parameter helpers

mod request;
pub mod utils;

pub use request::RestRequest;
