//! Connector creation input

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::model::AccessMode;

/// Protocol spoken to the external service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorProtocol {
    Http,
    #[serde(rename = "aws_sigv4")]
    AwsSigV4,
}

/// One remote call a connector knows how to make
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorAction {
    pub action_type: String,
    pub method: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_process_function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_process_function: Option<String>,
}

/// Input of a connector creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConnectorInput {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub protocol: ConnectorProtocol,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, Value>,

    /// Secrets forwarded to the remote side, never logged
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub credential: HashMap<String, String>,

    #[serde(default)]
    pub actions: Vec<ConnectorAction>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backend_roles: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_mode: Option<AccessMode>,
}

impl CreateConnectorInput {
    pub fn new(name: impl Into<String>, protocol: ConnectorProtocol) -> Self {
        Self {
            name: name.into(),
            description: None,
            version: None,
            protocol,
            parameters: HashMap::new(),
            credential: HashMap::new(),
            actions: Vec::new(),
            backend_roles: Vec::new(),
            access_mode: None,
        }
    }

    pub fn with_action(mut self, action: ConnectorAction) -> Self {
        self.actions.push(action);
        self
    }
}
