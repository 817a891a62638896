use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use crate::client::ActionExecutor;
use crate::domain::{MlError, RemoteError};

/// Executes actions by posting them as JSON to `{base_url}/_actions/{action}`
#[derive(Debug, Clone)]
pub struct HttpActionExecutor {
    client: reqwest::Client,
    base_url: String,
}

impl HttpActionExecutor {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MlError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MlError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}/_actions/{}", self.base_url, action)
    }
}

#[async_trait]
impl ActionExecutor for HttpActionExecutor {
    async fn execute(&self, action: &str, request: Value) -> Result<Value, MlError> {
        let url = self.action_url(action);
        debug!(url = %url, "Posting action");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                MlError::remote(RemoteError::new(
                    "transport_exception",
                    format!("Request failed: {}", e),
                ))
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = error_body(action, response.text().await);
            warn!(action, status = status.as_u16(), "Action rejected by remote executor");
            return Err(MlError::remote(remote_error_from_body(status.as_u16(), &body)));
        }

        response.json().await.map_err(|e| {
            MlError::serialization(format!("Failed to parse {} response: {}", action, e))
        })
    }
}

/// Text of an error response, or why it could not be read
fn error_body(action: &str, body: Result<String, reqwest::Error>) -> String {
    body.unwrap_or_else(|e| {
        warn!(action, error = %e, "Failed to read error response body");
        format!("Failed to read response body: {}", e)
    })
}

/// Remote failure from an error body; falls back to the raw text
fn remote_error_from_body(status: u16, body: &str) -> RemoteError {
    #[derive(serde::Deserialize)]
    struct Envelope {
        error: RemoteError,
    }

    if let Ok(Envelope { error }) = serde_json::from_str::<Envelope>(body) {
        return error.with_status(status);
    }

    if let Ok(error) = serde_json::from_str::<RemoteError>(body) {
        return error.with_status(status);
    }

    RemoteError::new("status_exception", format!("HTTP {}: {}", status, body)).with_status(status)
}
