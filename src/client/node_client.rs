//! Client that dispatches every operation to a cluster node

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use super::action::{
    ActionType, CreateConnectorAction, DeployModelAction, ModelDeleteAction, ModelGetAction,
    ModelSearchAction, PredictionTaskAction, ProfileAction, RegisterModelAction,
    RegisterModelGroupAction, TaskDeleteAction, TaskGetAction, TaskSearchAction,
    TrainAndPredictionTaskAction, TrainingTaskAction,
};
use super::executor::{execute_action, ActionExecutor};
use super::ml_client::MlClient;
use super::run::{RunAction, RunArgs};
use super::transport::{
    CreateConnectorRequest, CreateConnectorResponse, DeleteResponse, DeployModelRequest,
    DeployModelResponse, ModelDeleteRequest, ModelGetRequest, PredictionTaskRequest,
    ProfileRequest, ProfileResponse, RegisterModelGroupRequest, RegisterModelGroupResponse,
    RegisterModelRequest, RegisterModelResponse, TaskDeleteRequest, TaskGetRequest,
    TrainingTaskRequest,
};
use crate::domain::{
    CreateConnectorInput, MlError, MlInput, MlOutput, Model, RegisterModelGroupInput,
    RegisterModelInput, SearchRequest, SearchResponse, Task,
};

/// ML client backed by an [`ActionExecutor`].
///
/// Holds no mutable state; clones share the executor.
#[derive(Clone)]
pub struct NodeClient {
    executor: Arc<dyn ActionExecutor>,
}

impl NodeClient {
    pub fn new(executor: Arc<dyn ActionExecutor>) -> Self {
        Self { executor }
    }

    async fn execute<A: ActionType>(&self, request: &A::Request) -> Result<A::Response, MlError> {
        execute_action::<A>(self.executor.as_ref(), request).await
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl MlClient for NodeClient {
    #[instrument(skip(self, input), fields(algorithm = %input.algorithm()))]
    async fn predict(&self, model_id: &str, input: MlInput) -> Result<MlOutput, MlError> {
        input.validate(true)?;

        let request = PredictionTaskRequest {
            model_id: Some(model_id.to_string()),
            ml_input: input,
            dispatch_task: true,
        };

        let response = self.execute::<PredictionTaskAction>(&request).await?;
        Ok(response.output)
    }

    #[instrument(skip(self, input), fields(algorithm = %input.algorithm()))]
    async fn train(&self, input: MlInput, is_async: bool) -> Result<MlOutput, MlError> {
        input.validate(true)?;

        let request = TrainingTaskRequest {
            ml_input: input,
            is_async,
            dispatch_task: true,
        };

        let response = self.execute::<TrainingTaskAction>(&request).await?;
        Ok(response.output)
    }

    #[instrument(skip(self, input), fields(algorithm = %input.algorithm()))]
    async fn train_and_predict(&self, input: MlInput) -> Result<MlOutput, MlError> {
        input.validate(true)?;

        let request = TrainingTaskRequest {
            ml_input: input,
            is_async: false,
            dispatch_task: true,
        };

        let response = self.execute::<TrainAndPredictionTaskAction>(&request).await?;
        Ok(response.output)
    }

    #[instrument(skip(self, input, args))]
    async fn run(&self, mut input: MlInput, args: RunArgs) -> Result<MlOutput, MlError> {
        let plan = args.resolve(input.algorithm())?;

        // Parameters of another algorithm never travel with the new one
        let stale = input
            .parameters()
            .is_some_and(|p| p.function_name() != plan.algorithm);

        input.set_algorithm(plan.algorithm);
        if plan.parameters.is_some() || stale {
            input.set_parameters(plan.parameters);
        }

        debug!(action = ?plan.action, algorithm = %plan.algorithm, "Resolved run arguments");

        match plan.action {
            RunAction::Train { is_async } => self.train(input, is_async).await,
            RunAction::Predict { model_id } => self.predict(&model_id, input).await,
            RunAction::TrainAndPredict => self.train_and_predict(input).await,
        }
    }

    async fn get_model(&self, model_id: &str) -> Result<Model, MlError> {
        self.get_model_with_content(model_id, false).await
    }

    #[instrument(skip(self))]
    async fn get_model_with_content(
        &self,
        model_id: &str,
        return_content: bool,
    ) -> Result<Model, MlError> {
        let request = ModelGetRequest {
            model_id: model_id.to_string(),
            return_content,
        };

        let response = self.execute::<ModelGetAction>(&request).await?;
        Ok(response.model)
    }

    #[instrument(skip(self))]
    async fn delete_model(&self, model_id: &str) -> Result<DeleteResponse, MlError> {
        let request = ModelDeleteRequest {
            model_id: model_id.to_string(),
        };

        self.execute::<ModelDeleteAction>(&request).await
    }

    #[instrument(skip(self, request))]
    async fn search_model(&self, request: SearchRequest) -> Result<SearchResponse, MlError> {
        self.execute::<ModelSearchAction>(&request).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn register_model_group(
        &self,
        input: RegisterModelGroupInput,
    ) -> Result<RegisterModelGroupResponse, MlError> {
        let request = RegisterModelGroupRequest {
            register_model_group_input: input,
        };

        self.execute::<RegisterModelGroupAction>(&request).await
    }

    #[instrument(skip(self))]
    async fn get_task(&self, task_id: &str) -> Result<Task, MlError> {
        let request = TaskGetRequest {
            task_id: task_id.to_string(),
        };

        let response = self.execute::<TaskGetAction>(&request).await?;
        Ok(response.task)
    }

    #[instrument(skip(self))]
    async fn delete_task(&self, task_id: &str) -> Result<DeleteResponse, MlError> {
        let request = TaskDeleteRequest {
            task_id: task_id.to_string(),
        };

        self.execute::<TaskDeleteAction>(&request).await
    }

    #[instrument(skip(self, request))]
    async fn search_task(&self, request: SearchRequest) -> Result<SearchResponse, MlError> {
        self.execute::<TaskSearchAction>(&request).await
    }

    #[instrument(skip(self, input), fields(name = %input.model_name))]
    async fn register(&self, input: RegisterModelInput) -> Result<RegisterModelResponse, MlError> {
        let request = RegisterModelRequest {
            register_model_input: input,
        };

        self.execute::<RegisterModelAction>(&request).await
    }

    #[instrument(skip(self))]
    async fn deploy(&self, model_id: &str) -> Result<DeployModelResponse, MlError> {
        let request = DeployModelRequest {
            model_id: model_id.to_string(),
            is_async: false,
        };

        self.execute::<DeployModelAction>(&request).await
    }

    // Input carries credentials; keep it out of the span
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn create_connector(
        &self,
        input: CreateConnectorInput,
    ) -> Result<CreateConnectorResponse, MlError> {
        let request = CreateConnectorRequest {
            create_connector_input: input,
        };

        self.execute::<CreateConnectorAction>(&request).await
    }

    #[instrument(skip(self))]
    async fn profile(&self, request: ProfileRequest) -> Result<ProfileResponse, MlError> {
        self.execute::<ProfileAction>(&request).await
    }
}
