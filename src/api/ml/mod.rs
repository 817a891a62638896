//! ML endpoints under `/_plugins/_ml`

pub mod connectors;
pub mod model_groups;
pub mod models;
pub mod profile;
pub mod tasks;
pub mod training;

use axum::{
    body::Bytes,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use super::rest::utils::{get_algorithm, get_user_context, on_failure};
use super::rest::RestRequest;
use super::state::AppState;
use super::types::{ApiError, MlInputBody};
use crate::domain::{FunctionName, MlError, MlInput, SearchSource};

pub const ML_BASE_URI: &str = "/_plugins/_ml";

/// Create the ML router, to be nested under [`ML_BASE_URI`]
pub fn create_ml_router() -> Router<AppState> {
    Router::new()
        .route("/_train/{algorithm}", post(training::train))
        .route("/_predict/{algorithm}/{model_id}", post(training::predict))
        .route("/_train_predict/{algorithm}", post(training::train_and_predict))
        .route("/models/_search", post(models::search_models))
        .route("/models/_register", post(models::register_model))
        .route(
            "/models/{model_id}",
            get(models::get_model).delete(models::delete_model),
        )
        .route("/models/{model_id}/_deploy", post(models::deploy_model))
        .route(
            "/model_groups/_register",
            post(model_groups::register_model_group),
        )
        .route("/tasks/_search", post(tasks::search_tasks))
        .route(
            "/tasks/{task_id}",
            get(tasks::get_task).delete(tasks::delete_task),
        )
        .route("/connectors/_create", post(connectors::create_connector))
        .route("/profile", get(profile::get_profile))
}

/// Name of the calling user, for logging
fn requesting_user(request: &RestRequest) -> String {
    get_user_context(request.context())
        .map(|user| user.name)
        .unwrap_or_else(|| "anonymous".to_string())
}

/// Bad parameters are answered with 400
fn invalid_request(error: MlError) -> ApiError {
    on_failure(StatusCode::BAD_REQUEST, "Invalid request", error)
}

fn algorithm_of(request: &RestRequest) -> Result<FunctionName, ApiError> {
    get_algorithm(request)
        .and_then(|name| name.parse::<FunctionName>())
        .map_err(invalid_request)
}

/// ML input for `algorithm` from the request body
fn ml_input_of(algorithm: FunctionName, body: &Bytes) -> Result<MlInput, ApiError> {
    let body = MlInputBody::from_bytes(body)?
        .ok_or_else(|| invalid_request(MlError::invalid_argument("ML Input can't be null")))?;

    body.into_ml_input(algorithm).map_err(invalid_request)
}

/// Search source from an optional body; an empty body matches everything
fn search_source_of(body: &Bytes) -> Result<SearchSource, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SearchSource::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        invalid_request(MlError::invalid_argument(format!(
            "Invalid search request: {}",
            e
        )))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::router::create_router_with_state;
    use crate::api::state::AppState;
    use crate::client::MockMlClient;
    use crate::domain::cluster::MockClusterService;
    use crate::domain::{ClusterState, DiscoveryNode, DiscoveryNodes, NodeRole};

    pub const USER_INFO_HEADER: &str = "x-security-user-info";

    pub fn cluster() -> MockClusterService {
        let mut cluster = MockClusterService::new();
        cluster.expect_state().returning(|| {
            ClusterState::new(
                "test",
                DiscoveryNodes::new(vec![
                    DiscoveryNode::new("data-1", [NodeRole::Data]),
                    DiscoveryNode::new("data-2", [NodeRole::Data, NodeRole::Ml]),
                    DiscoveryNode::new("manager", [NodeRole::ClusterManager]),
                ]),
            )
        });
        cluster
    }

    pub fn app(client: MockMlClient) -> Router {
        let state = AppState::new(Arc::new(client), Arc::new(cluster()))
            .with_user_info_header(USER_INFO_HEADER);
        create_router_with_state(state)
    }

    /// Send a request and return the status and decoded JSON body
    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
        headers: &[(&str, &str)],
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}
