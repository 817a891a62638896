//! Request and response objects exchanged with remote actions

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    CreateConnectorInput, MlInput, MlOutput, Model, RegisterModelGroupInput, RegisterModelInput,
    Task,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionTaskRequest {
    pub model_id: Option<String>,
    pub ml_input: MlInput,
    pub dispatch_task: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingTaskRequest {
    pub ml_input: MlInput,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub dispatch_task: bool,
}

/// Envelope shared by predict, train and train-and-predict responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResponse {
    pub output: MlOutput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGetRequest {
    pub model_id: String,
    #[serde(default)]
    pub return_content: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelGetResponse {
    pub model: Model,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDeleteRequest {
    pub model_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGetRequest {
    pub task_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGetResponse {
    pub task: Task,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDeleteRequest {
    pub task_id: String,
}

/// Outcome of a document deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(rename = "_index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    /// `deleted` or `not_found`
    pub result: String,
}

impl DeleteResponse {
    pub fn is_deleted(&self) -> bool {
        self.result == "deleted"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelGroupRequest {
    pub register_model_group_input: RegisterModelGroupInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelGroupResponse {
    pub model_group_id: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelRequest {
    pub register_model_input: RegisterModelInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    pub status: String,
    /// Present when registration completed synchronously (remote models)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployModelRequest {
    pub model_id: String,
    #[serde(rename = "async")]
    pub is_async: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployModelResponse {
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConnectorRequest {
    pub create_connector_input: CreateConnectorInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateConnectorResponse {
    pub connector_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub node_ids: Vec<String>,
    #[serde(default)]
    pub return_all_tasks: bool,
    #[serde(default)]
    pub return_all_models: bool,
}

/// Per-node profile, opaque to this client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub nodes: serde_json::Map<String, Value>,
}
