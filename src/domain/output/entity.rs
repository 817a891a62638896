//! ML output returned by train / predict actions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of a train, predict or train-and-predict action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MlOutput {
    /// Training finished (sync) or was queued (async)
    Training {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        model_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<String>,
        status: String,
    },

    /// Tabular prediction result
    Prediction {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        task_id: Option<String>,
        status: String,
        #[serde(default)]
        prediction_result: Vec<Map<String, Value>>,
    },

    /// Tensor output of deployed (pretrained or remote) models
    ModelTensor {
        #[serde(default)]
        inference_results: Vec<Value>,
    },
}

impl MlOutput {
    /// Task handle for outputs produced by a task
    pub fn task_id(&self) -> Option<&str> {
        match self {
            Self::Training { task_id, .. } | Self::Prediction { task_id, .. } => task_id.as_deref(),
            Self::ModelTensor { .. } => None,
        }
    }

    pub fn status(&self) -> Option<&str> {
        match self {
            Self::Training { status, .. } | Self::Prediction { status, .. } => Some(status),
            Self::ModelTensor { .. } => None,
        }
    }
}
