//! Model registration input

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ModelFormat;
use crate::domain::input::FunctionName;

/// Input of a model registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelInput {
    #[serde(rename = "name")]
    pub model_name: String,

    #[serde(default = "default_function_name")]
    pub function_name: FunctionName,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_group_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format: Option<ModelFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_config: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_content_hash_value: Option<String>,

    /// Deploy right after registration
    #[serde(default)]
    pub deploy_model: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub model_node_ids: Vec<String>,
}

fn default_function_name() -> FunctionName {
    FunctionName::TextEmbedding
}

impl RegisterModelInput {
    pub fn new(model_name: impl Into<String>, function_name: FunctionName) -> Self {
        Self {
            model_name: model_name.into(),
            function_name,
            version: None,
            model_group_id: None,
            description: None,
            connector_id: None,
            model_format: None,
            model_config: None,
            url: None,
            model_content_hash_value: None,
            deploy_model: false,
            model_node_ids: Vec::new(),
        }
    }

    pub fn with_connector(mut self, connector_id: impl Into<String>) -> Self {
        self.connector_id = Some(connector_id.into());
        self
    }

    pub fn with_model_group(mut self, model_group_id: impl Into<String>) -> Self {
        self.model_group_id = Some(model_group_id.into());
        self
    }
}
