//! Remote action identifiers and their request/response types

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{
    CreateConnectorRequest, CreateConnectorResponse, DeleteResponse, DeployModelRequest,
    DeployModelResponse, ModelDeleteRequest, ModelGetRequest, ModelGetResponse,
    PredictionTaskRequest, ProfileRequest, ProfileResponse, RegisterModelGroupRequest,
    RegisterModelGroupResponse, RegisterModelRequest, RegisterModelResponse, TaskDeleteRequest,
    TaskGetRequest, TaskGetResponse, TaskResponse, TrainingTaskRequest,
};
use crate::domain::{SearchRequest, SearchResponse};

/// A named remote action known to both client and executor
pub trait ActionType {
    const NAME: &'static str;
    type Request: Serialize + Send + Sync;
    type Response: DeserializeOwned + Send;
}

macro_rules! action {
    ($(#[$doc:meta])* $name:ident, $id:literal, $request:ty => $response:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ActionType for $name {
            const NAME: &'static str = $id;
            type Request = $request;
            type Response = $response;
        }
    };
}

action!(
    /// Run a prediction against a trained or deployed model
    PredictionTaskAction,
    "cluster:admin/opensearch/ml/predict",
    PredictionTaskRequest => TaskResponse
);
action!(
    /// Train a model
    TrainingTaskAction,
    "cluster:admin/opensearch/ml/train",
    TrainingTaskRequest => TaskResponse
);
action!(
    /// Train a throwaway model and predict with it in one step
    TrainAndPredictionTaskAction,
    "cluster:admin/opensearch/ml/trainAndPredict",
    TrainingTaskRequest => TaskResponse
);
action!(
    ModelGetAction,
    "cluster:admin/opensearch/ml/models/get",
    ModelGetRequest => ModelGetResponse
);
action!(
    ModelDeleteAction,
    "cluster:admin/opensearch/ml/models/delete",
    ModelDeleteRequest => DeleteResponse
);
action!(
    ModelSearchAction,
    "cluster:admin/opensearch/ml/models/search",
    SearchRequest => SearchResponse
);
action!(
    RegisterModelGroupAction,
    "cluster:admin/opensearch/ml/register_model_group",
    RegisterModelGroupRequest => RegisterModelGroupResponse
);
action!(
    TaskGetAction,
    "cluster:admin/opensearch/ml/tasks/get",
    TaskGetRequest => TaskGetResponse
);
action!(
    TaskDeleteAction,
    "cluster:admin/opensearch/ml/tasks/delete",
    TaskDeleteRequest => DeleteResponse
);
action!(
    TaskSearchAction,
    "cluster:admin/opensearch/ml/tasks/search",
    SearchRequest => SearchResponse
);
action!(
    RegisterModelAction,
    "cluster:admin/opensearch/ml/register_model",
    RegisterModelRequest => RegisterModelResponse
);
action!(
    DeployModelAction,
    "cluster:admin/opensearch/ml/deploy_model",
    DeployModelRequest => DeployModelResponse
);
action!(
    CreateConnectorAction,
    "cluster:admin/opensearch/ml/create_connector",
    CreateConnectorRequest => CreateConnectorResponse
);
action!(
    /// Per-node model and task profile
    ProfileAction,
    "cluster:admin/opensearch/ml/profile",
    ProfileRequest => ProfileResponse
);
