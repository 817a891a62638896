//! The dispatch primitive every facade operation goes through

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::action::ActionType;
use crate::domain::MlError;

#[cfg(test)]
use mockall::automock;

/// Sends a request to a named remote action and resolves with its response.
///
/// Implementations resolve exactly once, with either the raw response or the
/// remote failure. Retries, timeouts and cancellation belong here, not in the
/// facade.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ActionExecutor: Send + Sync {
    async fn execute(&self, action: &str, request: Value) -> Result<Value, MlError>;
}

/// Encode `request`, dispatch it to `A` and decode the raw response.
///
/// Remote failures are returned unchanged.
pub async fn execute_action<A: ActionType>(
    executor: &dyn ActionExecutor,
    request: &A::Request,
) -> Result<A::Response, MlError> {
    let payload = serde_json::to_value(request)?;

    debug!(action = A::NAME, "Dispatching remote action");

    let raw = executor.execute(A::NAME, payload).await.inspect_err(|e| {
        warn!(action = A::NAME, error = %e, "Remote action failed");
    })?;

    serde_json::from_value(raw).map_err(|e| {
        MlError::serialization(format!("Failed to decode {} response: {}", A::NAME, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::action::{ModelDeleteAction, TaskGetAction};
    use crate::client::transport::{ModelDeleteRequest, TaskGetRequest};
    use crate::domain::RemoteError;
    use serde_json::json;

    #[tokio::test]
    async fn test_execute_action_decodes_response() {
        let mut mock = MockActionExecutor::new();
        mock.expect_execute()
            .withf(|action, request| {
                action == "cluster:admin/opensearch/ml/models/delete" && request["model_id"] == "m-1"
            })
            .times(1)
            .returning(|_, _| Ok(json!({"_id": "m-1", "result": "deleted"})));

        let request = ModelDeleteRequest {
            model_id: "m-1".to_string(),
        };
        let response = execute_action::<ModelDeleteAction>(&mock, &request)
            .await
            .unwrap();

        assert!(response.is_deleted());
    }

    #[tokio::test]
    async fn test_execute_action_forwards_remote_failure() {
        let remote = RemoteError::new("resource_not_found_exception", "Fail to find task")
            .with_status(404);
        let expected = remote.clone();

        let mut mock = MockActionExecutor::new();
        mock.expect_execute()
            .returning(move |_, _| Err(MlError::remote(remote.clone())));

        let request = TaskGetRequest {
            task_id: "t-1".to_string(),
        };
        let err = execute_action::<TaskGetAction>(&mock, &request)
            .await
            .unwrap_err();

        match err {
            MlError::Remote(actual) => assert_eq!(actual, expected),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_action_rejects_malformed_response() {
        let mut mock = MockActionExecutor::new();
        mock.expect_execute()
            .returning(|_, _| Ok(json!({"unexpected": true})));

        let request = TaskGetRequest {
            task_id: "t-1".to_string(),
        };
        let err = execute_action::<TaskGetAction>(&mock, &request)
            .await
            .unwrap_err();

        assert!(matches!(err, MlError::Serialization { .. }));
        assert!(err.to_string().contains("tasks/get"));
    }
}
