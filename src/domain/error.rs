use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the remote executor, carried through unchanged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error_type}: {reason}")]
pub struct RemoteError {
    /// HTTP-like status reported by the remote side, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,

    /// Remote exception type (e.g. `resource_not_found_exception`)
    #[serde(rename = "type")]
    pub error_type: String,

    /// Human readable reason
    pub reason: String,
}

impl RemoteError {
    pub fn new(error_type: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            status: None,
            error_type: error_type.into(),
            reason: reason.into(),
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }
}

/// Errors surfaced by the ML client
#[derive(Debug, Clone, Error)]
pub enum MlError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Remote execution failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl MlError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn remote(error: RemoteError) -> Self {
        Self::Remote(error)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl From<serde_json::Error> for MlError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message_is_verbatim() {
        let error = MlError::invalid_argument("Request should contain model_id");
        assert_eq!(error.to_string(), "Request should contain model_id");
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn test_remote_error_display() {
        let error = MlError::remote(
            RemoteError::new("resource_not_found_exception", "Failed to find model").with_status(404),
        );
        assert_eq!(
            error.to_string(),
            "Remote execution failed: resource_not_found_exception: Failed to find model"
        );
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn test_remote_error_deserialization() {
        let json = r#"{"type": "illegal_state_exception", "reason": "busy", "status": 429}"#;
        let error: RemoteError = serde_json::from_str(json).unwrap();
        assert_eq!(error.status, Some(429));
        assert_eq!(error.error_type, "illegal_state_exception");
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let error: MlError = err.into();
        assert!(matches!(error, MlError::Serialization { .. }));
    }
}
