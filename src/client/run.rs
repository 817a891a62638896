//! Arguments of the multi-step `run` operation

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::domain::{AlgoParams, FunctionName, MlError};

pub const ACTION_TRAIN: &str = "train";
pub const ACTION_PREDICT: &str = "predict";
pub const ACTION_TRAIN_AND_PREDICT: &str = "trainandpredict";

/// What `run` should do once its arguments are resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunAction {
    Train { is_async: bool },
    Predict { model_id: String },
    TrainAndPredict,
}

/// Fully resolved `run` invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RunPlan {
    pub action: RunAction,
    pub algorithm: FunctionName,
    /// Replacement parameters, `None` keeps the input's own
    pub parameters: Option<AlgoParams>,
}

/// Loosely specified arguments of `run`, as they arrive from a CLI or JSON map.
///
/// Keys other than `action`, `algorithm`, `model_id` and `async` are treated
/// as algorithm parameters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RunArgs {
    #[serde(default)]
    pub action: Option<String>,

    #[serde(default)]
    pub algorithm: Option<String>,

    #[serde(default, alias = "modelid", alias = "modelId")]
    pub model_id: Option<String>,

    #[serde(default, rename = "async", deserialize_with = "deserialize_flag")]
    pub is_async: Option<bool>,

    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl RunArgs {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Default::default()
        }
    }

    /// Parse from a JSON object
    pub fn from_value(value: Value) -> Result<Self, MlError> {
        serde_json::from_value(value)
            .map_err(|e| MlError::invalid_argument(format!("Invalid run arguments: {}", e)))
    }

    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = Some(algorithm.into());
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    pub fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = Some(is_async);
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    /// Resolve the arguments against the input's current algorithm.
    ///
    /// Fails before anything is dispatched when the action is missing or
    /// unknown, the algorithm or its parameters are invalid, or a prediction
    /// has no model id.
    pub fn resolve(&self, current: FunctionName) -> Result<RunPlan, MlError> {
        let action = self
            .action
            .as_deref()
            .map(|a| a.trim().to_ascii_lowercase())
            .ok_or_else(|| MlError::invalid_argument("The parameter action is required."))?;

        if !matches!(
            action.as_str(),
            ACTION_TRAIN | ACTION_PREDICT | ACTION_TRAIN_AND_PREDICT
        ) {
            return Err(MlError::invalid_argument("Unsupported action."));
        }

        let algorithm = match self.algorithm.as_deref() {
            Some(name) => name.parse::<FunctionName>()?,
            None => current,
        };

        let parameters = if self.parameters.is_empty() {
            None
        } else {
            AlgoParams::from_arguments(algorithm, &self.parameters)?
        };

        let action = match action.as_str() {
            ACTION_TRAIN => RunAction::Train {
                is_async: self.is_async.unwrap_or(false),
            },
            ACTION_PREDICT => {
                let model_id = self
                    .model_id
                    .clone()
                    .filter(|id| !id.is_empty())
                    .ok_or_else(|| {
                        MlError::invalid_argument("The model ID is required for prediction.")
                    })?;
                RunAction::Predict { model_id }
            }
            _ => RunAction::TrainAndPredict,
        };

        Ok(RunPlan {
            action,
            algorithm,
            parameters,
        })
    }
}

/// Accept `true`/`false` as JSON booleans or as strings
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            other => Err(serde::de::Error::custom(format!(
                "async must be true or false, got '{}'",
                other
            ))),
        },
    }
}
