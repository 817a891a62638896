//! Model entity as returned by the remote side

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::input::FunctionName;

/// Lifecycle state of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelState {
    Trained,
    Registering,
    Registered,
    Deploying,
    Deployed,
    PartiallyDeployed,
    Undeployed,
    DeployFailed,
}

impl ModelState {
    /// Whether the model can serve predictions on at least one node
    pub fn is_serving(&self) -> bool {
        matches!(self, Self::Deployed | Self::PartiallyDeployed)
    }
}

/// Serialized format of a model's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModelFormat {
    TorchScript,
    Onnx,
}

/// Model metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    pub name: String,

    pub algorithm: FunctionName,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_group_id: Option<String>,

    #[serde(default, rename = "model_version", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_format: Option<ModelFormat>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_state: Option<ModelState>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connector_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_config: Option<Value>,

    /// Base64 model content, only present when explicitly requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_content: Option<String>,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated_time: Option<DateTime<Utc>>,
}

impl Model {
    pub fn new(name: impl Into<String>, algorithm: FunctionName) -> Self {
        Self {
            model_id: None,
            name: name.into(),
            algorithm,
            model_group_id: None,
            version: None,
            description: None,
            model_format: None,
            model_state: None,
            connector_id: None,
            model_config: None,
            model_content: None,
            created_time: None,
            last_updated_time: None,
        }
    }

    pub fn with_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_state(mut self, state: ModelState) -> Self {
        self.model_state = Some(state);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_from_remote_json() {
        let value = json!({
            "model_id": "m-1",
            "name": "kmeans-iris",
            "algorithm": "KMEANS",
            "model_version": "1",
            "model_state": "DEPLOYED",
            "created_time": 1700000000000i64
        });

        let model: Model = serde_json::from_value(value).unwrap();
        assert_eq!(model.model_id.as_deref(), Some("m-1"));
        assert_eq!(model.version.as_deref(), Some("1"));
        assert!(model.model_state.unwrap().is_serving());
        assert_eq!(model.created_time.unwrap().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_model_serialization_skips_content() {
        let model = Model::new("m", FunctionName::Remote).with_id("abc");
        let value = serde_json::to_value(&model).unwrap();
        assert!(value.get("model_content").is_none());
        assert_eq!(value["algorithm"], "REMOTE");
    }
}
