//! Typed machine learning client interface

use async_trait::async_trait;

use super::run::RunArgs;
use super::transport::{
    CreateConnectorResponse, DeleteResponse, DeployModelResponse, ProfileRequest,
    ProfileResponse, RegisterModelGroupResponse, RegisterModelResponse,
};
use crate::domain::{
    CreateConnectorInput, MlError, MlInput, MlOutput, Model, RegisterModelGroupInput,
    RegisterModelInput, SearchRequest, SearchResponse, Task,
};

#[cfg(test)]
use mockall::automock;

/// Operations offered to callers of the ML cluster.
///
/// Every call resolves exactly once. Invalid arguments are rejected before
/// anything is sent; remote failures are returned as reported.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MlClient: Send + Sync {
    /// Predict with an already trained or deployed model
    async fn predict(&self, model_id: &str, input: MlInput) -> Result<MlOutput, MlError>;

    /// Train a model; async training returns a task handle in the output
    async fn train(&self, input: MlInput, is_async: bool) -> Result<MlOutput, MlError>;

    async fn train_and_predict(&self, input: MlInput) -> Result<MlOutput, MlError>;

    /// Train, predict or train-and-predict, as selected by `args`
    async fn run(&self, input: MlInput, args: RunArgs) -> Result<MlOutput, MlError>;

    async fn get_model(&self, model_id: &str) -> Result<Model, MlError>;

    /// `get_model` that also returns the model content when asked to
    async fn get_model_with_content(
        &self,
        model_id: &str,
        return_content: bool,
    ) -> Result<Model, MlError>;

    async fn delete_model(&self, model_id: &str) -> Result<DeleteResponse, MlError>;

    async fn search_model(&self, request: SearchRequest) -> Result<SearchResponse, MlError>;

    async fn register_model_group(
        &self,
        input: RegisterModelGroupInput,
    ) -> Result<RegisterModelGroupResponse, MlError>;

    async fn get_task(&self, task_id: &str) -> Result<Task, MlError>;

    async fn delete_task(&self, task_id: &str) -> Result<DeleteResponse, MlError>;

    async fn search_task(&self, request: SearchRequest) -> Result<SearchResponse, MlError>;

    async fn register(&self, input: RegisterModelInput) -> Result<RegisterModelResponse, MlError>;

    async fn deploy(&self, model_id: &str) -> Result<DeployModelResponse, MlError>;

    async fn create_connector(
        &self,
        input: CreateConnectorInput,
    ) -> Result<CreateConnectorResponse, MlError>;

    async fn profile(&self, request: ProfileRequest) -> Result<ProfileResponse, MlError>;
}
