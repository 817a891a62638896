//! REST request and response types

pub mod error;
pub mod json;
pub mod ml_input;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use ml_input::MlInputBody;
