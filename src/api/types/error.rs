//! REST error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::MlError;

pub const ILLEGAL_ARGUMENT: &str = "illegal_argument_exception";
pub const PARSE_EXCEPTION: &str = "parse_exception";
pub const SERIALIZATION: &str = "serialization_exception";
pub const INTERNAL: &str = "internal_exception";

/// `{ "error": { "type", "reason" }, "status" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
    pub status: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub reason: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    error_type: error_type.into(),
                    reason: reason.into(),
                },
                status: status.as_u16(),
            },
        }
    }

    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ILLEGAL_ARGUMENT, reason)
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL, reason)
    }

    pub fn reason(&self) -> &str {
        &self.response.error.reason
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<MlError> for ApiError {
    fn from(err: MlError) -> Self {
        match err {
            MlError::InvalidArgument { message } => Self::bad_request(message),
            MlError::Remote(remote) => {
                let status = remote
                    .status
                    .and_then(|s| StatusCode::from_u16(s).ok())
                    .unwrap_or(StatusCode::BAD_GATEWAY);
                Self::new(status, remote.error_type, remote.reason)
            }
            MlError::Serialization { message } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, SERIALIZATION, message)
            }
            MlError::Configuration { message } | MlError::Internal { message } => {
                Self::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.reason
        )
    }
}

impl std::error::Error for ApiError {}
