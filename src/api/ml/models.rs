//! Model endpoints

use axum::{body::Bytes, extract::State};
use tracing::{debug, info};

use super::{invalid_request, requesting_user, search_source_of};
use crate::api::rest::utils::{
    get_fetch_source_context, get_parameter_id, get_source_context, is_return_content,
    MODEL_CONTENT_FIELD, PARAMETER_MODEL_ID,
};
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::client::{DeleteResponse, DeployModelResponse, RegisterModelResponse};
use crate::domain::{Model, RegisterModelInput, SearchRequest, SearchResponse};

/// GET /_plugins/_ml/models/{model_id}?return_content=
pub async fn get_model(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<Model>, ApiError> {
    let model_id = get_parameter_id(&request, PARAMETER_MODEL_ID).map_err(invalid_request)?;
    let return_content = is_return_content(&request).map_err(invalid_request)?;
    let fetch_source = get_fetch_source_context(return_content);

    debug!(
        user = %requesting_user(&request),
        model_id = %model_id,
        return_content,
        "Getting model"
    );

    let mut model = state
        .client
        .get_model_with_content(&model_id, return_content)
        .await?;

    // Nodes that ignore the flag still must not leak content
    if fetch_source.excludes.iter().any(|e| e == MODEL_CONTENT_FIELD) {
        model.model_content = None;
    }

    Ok(Json(model))
}

/// DELETE /_plugins/_ml/models/{model_id}
pub async fn delete_model(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<DeleteResponse>, ApiError> {
    let model_id = get_parameter_id(&request, PARAMETER_MODEL_ID).map_err(invalid_request)?;

    info!(user = %requesting_user(&request), model_id = %model_id, "Deleting model");

    let response = state.client.delete_model(&model_id).await?;
    Ok(Json(response))
}

/// POST /_plugins/_ml/models/_search
pub async fn search_models(
    State(state): State<AppState>,
    request: RestRequest,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let mut source = search_source_of(&body)?;
    source.fetch_source = Some(get_source_context(&request, &source));

    debug!(user = %requesting_user(&request), "Searching models");

    let response = state.client.search_model(SearchRequest::new(source)).await?;
    Ok(Json(response))
}

/// POST /_plugins/_ml/models/_register
pub async fn register_model(
    State(state): State<AppState>,
    request: RestRequest,
    Json(input): Json<RegisterModelInput>,
) -> Result<Json<RegisterModelResponse>, ApiError> {
    info!(
        user = %requesting_user(&request),
        name = %input.model_name,
        function_name = %input.function_name,
        "Registering model"
    );

    let response = state.client.register(input).await?;
    Ok(Json(response))
}

/// POST /_plugins/_ml/models/{model_id}/_deploy
pub async fn deploy_model(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<DeployModelResponse>, ApiError> {
    let model_id = get_parameter_id(&request, PARAMETER_MODEL_ID).map_err(invalid_request)?;

    info!(user = %requesting_user(&request), model_id = %model_id, "Deploying model");

    let response = state.client.deploy(&model_id).await?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ml::test_support::{app, send, USER_INFO_HEADER};
    use crate::client::MockMlClient;
    use crate::domain::search::SearchHits;
    use crate::domain::{FunctionName, MlError, RemoteError};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn empty_hits() -> SearchResponse {
        SearchResponse {
            took: 1,
            timed_out: false,
            hits: SearchHits {
                total: None,
                max_score: None,
                hits: vec![],
            },
        }
    }

    #[tokio::test]
    async fn test_get_model_strips_content_by_default() {
        let mut client = MockMlClient::new();
        client
            .expect_get_model_with_content()
            .withf(|id, _| id == "m-1")
            .times(2)
            .returning(|id, _| {
                let mut model = Model::new("kmeans", FunctionName::Kmeans).with_id(id);
                model.model_content = Some("UEsDBA==".to_string());
                Ok(model)
            });
        let app = app(client);

        let (status, body) = send(app.clone(), Method::GET, "/_plugins/_ml/models/m-1", None, &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model_id"], "m-1");
        assert!(body.get("model_content").is_none());

        let (_, body) = send(
            app,
            Method::GET,
            "/_plugins/_ml/models/m-1?return_content=true",
            None,
            &[],
        )
        .await;
        assert_eq!(body["model_content"], "UEsDBA==");
    }

    #[tokio::test]
    async fn test_get_model_passes_return_content() {
        let mut client = MockMlClient::new();
        client
            .expect_get_model_with_content()
            .withf(|id, return_content| id == "m-1" && *return_content)
            .times(1)
            .returning(|id, _| Ok(Model::new("kmeans", FunctionName::Kmeans).with_id(id)));
        client
            .expect_get_model_with_content()
            .withf(|id, return_content| id == "m-2" && !*return_content)
            .times(1)
            .returning(|id, _| Ok(Model::new("kmeans", FunctionName::Kmeans).with_id(id)));
        let app = app(client);

        let (status, _) = send(
            app.clone(),
            Method::GET,
            "/_plugins/_ml/models/m-1?return_content=TRUE",
            None,
            &[],
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(app, Method::GET, "/_plugins/_ml/models/m-2", None, &[]).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_missing_model() {
        let mut client = MockMlClient::new();
        client.expect_get_model_with_content().returning(|_, _| {
            Err(MlError::remote(
                RemoteError::new("status_exception", "Failed to find model").with_status(404),
            ))
        });

        let (status, body) =
            send(app(client), Method::GET, "/_plugins/_ml/models/nope", None, &[]).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["reason"], "Failed to find model");
    }

    #[tokio::test]
    async fn test_delete_model() {
        let mut client = MockMlClient::new();
        client
            .expect_delete_model()
            .withf(|id| id == "m-1")
            .times(1)
            .returning(|id| {
                Ok(serde_json::from_value(json!({"_id": id, "result": "deleted"})).unwrap())
            });

        let (status, body) =
            send(app(client), Method::DELETE, "/_plugins/_ml/models/m-1", None, &[]).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "deleted");
    }

    #[tokio::test]
    async fn test_search_excludes_ui_metadata_for_clients() {
        let mut client = MockMlClient::new();
        client
            .expect_search_model()
            .withf(|request| {
                let ctx = request.source.fetch_source.as_ref().unwrap();
                ctx.excludes == vec!["model_content", "ui_metadata"]
                    && request.source.extra["size"] == 10
            })
            .times(1)
            .returning(|_| Ok(empty_hits()));

        let (status, _) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/models/_search",
            Some(json!({
                "query": {"match_all": {}},
                "size": 10,
                "_source": {"excludes": ["model_content"]}
            })),
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_from_dashboards() {
        let mut client = MockMlClient::new();
        client
            .expect_search_model()
            .withf(|request| {
                request.source.fetch_source.as_ref().unwrap().excludes
                    == vec!["model_content", "ui_metadata"]
            })
            .times(1)
            .returning(|_| Ok(empty_hits()));
        client
            .expect_search_model()
            .withf(|request| {
                let ctx = request.source.fetch_source.as_ref().unwrap();
                ctx.fetch_source && ctx.excludes.is_empty()
            })
            .times(1)
            .returning(|_| Ok(empty_hits()));
        let app = app(client);

        let (status, _) = send(
            app.clone(),
            Method::POST,
            "/_plugins/_ml/models/_search",
            Some(json!({"_source": {"excludes": ["model_content"]}})),
            &[("user-agent", "OpenSearch Dashboards")],
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            app,
            Method::POST,
            "/_plugins/_ml/models/_search",
            Some(json!({"query": {"match_all": {}}})),
            &[("user-agent", "OpenSearch Dashboards")],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_and_deploy() {
        let mut client = MockMlClient::new();
        client
            .expect_register()
            .withf(|input| input.model_name == "bert" && input.connector_id.is_none())
            .times(1)
            .returning(|_| {
                Ok(RegisterModelResponse {
                    task_id: Some("t-1".to_string()),
                    status: "CREATED".to_string(),
                    model_id: None,
                })
            });
        client
            .expect_deploy()
            .withf(|id| id == "m-2")
            .times(1)
            .returning(|_| {
                Ok(DeployModelResponse {
                    task_id: "t-2".to_string(),
                    task_type: Some("DEPLOY_MODEL".to_string()),
                    status: "CREATED".to_string(),
                })
            });
        let app = app(client);

        let (status, body) = send(
            app.clone(),
            Method::POST,
            "/_plugins/_ml/models/_register",
            Some(json!({
                "name": "bert",
                "function_name": "TEXT_EMBEDDING",
                "model_format": "TORCH_SCRIPT",
                "url": "https://example.com/bert.zip"
            })),
            &[(USER_INFO_HEADER, "alice|ml_team|ml_full_access|")],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task_id"], "t-1");

        let (status, body) = send(
            app,
            Method::POST,
            "/_plugins/_ml/models/m-2/_deploy",
            None,
            &[],
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task_type"], "DEPLOY_MODEL");
    }
}
