//! Train, predict and train-and-predict endpoints

use axum::{body::Bytes, extract::State};
use tracing::info;

use super::{algorithm_of, invalid_request, ml_input_of, requesting_user};
use crate::api::rest::utils::{get_parameter_id, is_async, PARAMETER_MODEL_ID};
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::MlOutput;

/// POST /_plugins/_ml/_train/{algorithm}?async=
pub async fn train(
    State(state): State<AppState>,
    request: RestRequest,
    body: Bytes,
) -> Result<Json<MlOutput>, ApiError> {
    let algorithm = algorithm_of(&request)?;
    let is_async = is_async(&request).map_err(invalid_request)?;
    let input = ml_input_of(algorithm, &body)?;

    info!(
        user = %requesting_user(&request),
        algorithm = %algorithm,
        is_async,
        "Training model"
    );

    let output = state.client.train(input, is_async).await?;
    Ok(Json(output))
}

/// POST /_plugins/_ml/_predict/{algorithm}/{model_id}
pub async fn predict(
    State(state): State<AppState>,
    request: RestRequest,
    body: Bytes,
) -> Result<Json<MlOutput>, ApiError> {
    let algorithm = algorithm_of(&request)?;
    let model_id = get_parameter_id(&request, PARAMETER_MODEL_ID).map_err(invalid_request)?;
    let input = ml_input_of(algorithm, &body)?;

    info!(
        user = %requesting_user(&request),
        algorithm = %algorithm,
        model_id = %model_id,
        "Predicting"
    );

    let output = state.client.predict(&model_id, input).await?;
    Ok(Json(output))
}

/// POST /_plugins/_ml/_train_predict/{algorithm}
pub async fn train_and_predict(
    State(state): State<AppState>,
    request: RestRequest,
    body: Bytes,
) -> Result<Json<MlOutput>, ApiError> {
    let algorithm = algorithm_of(&request)?;
    let input = ml_input_of(algorithm, &body)?;

    info!(
        user = %requesting_user(&request),
        algorithm = %algorithm,
        "Training and predicting"
    );

    let output = state.client.train_and_predict(input).await?;
    Ok(Json(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ml::test_support::{app, send};
    use crate::client::MockMlClient;
    use crate::domain::{FunctionName, MlError, RemoteError};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    fn search_body() -> serde_json::Value {
        json!({
            "parameters": {"centroids": 2},
            "input_query": {"query": {"match_all": {}}},
            "input_index": ["iris_data"]
        })
    }

    #[tokio::test]
    async fn test_train_async() {
        let mut client = MockMlClient::new();
        client
            .expect_train()
            .withf(|input, is_async| input.algorithm() == FunctionName::Kmeans && *is_async)
            .times(1)
            .returning(|_, _| {
                Ok(MlOutput::Training {
                    model_id: None,
                    task_id: Some("t-1".to_string()),
                    status: "CREATED".to_string(),
                })
            });

        let (status, body) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/_train/kmeans?async=true",
            Some(search_body()),
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task_id"], "t-1");
        assert_eq!(body["output_type"], "TRAINING");
    }

    #[tokio::test]
    async fn test_train_without_body() {
        let mut client = MockMlClient::new();
        client.expect_train().never();

        let (status, body) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/_train/kmeans",
            None,
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["reason"], "ML Input can't be null");
    }

    #[tokio::test]
    async fn test_unknown_algorithm() {
        let mut client = MockMlClient::new();
        client.expect_train().never();

        let (status, body) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/_train/svm",
            Some(search_body()),
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_predict_passes_model_id() {
        let mut client = MockMlClient::new();
        client
            .expect_predict()
            .withf(|model_id, _| model_id == "m-1")
            .times(1)
            .returning(|_, _| {
                Ok(MlOutput::Prediction {
                    task_id: None,
                    status: "COMPLETED".to_string(),
                    prediction_result: vec![],
                })
            });

        let (status, body) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/_predict/kmeans/m-1",
            Some(search_body()),
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "COMPLETED");
    }

    #[tokio::test]
    async fn test_train_and_predict_forwards_remote_status() {
        let mut client = MockMlClient::new();
        client.expect_train_and_predict().times(1).returning(|_| {
            Err(MlError::remote(
                RemoteError::new("m_l_limit_exceeded_exception", "too many tasks").with_status(429),
            ))
        });

        let (status, body) = send(
            app(client),
            Method::POST,
            "/_plugins/_ml/_train_predict/kmeans",
            Some(search_body()),
            &[],
        )
        .await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["error"]["type"], "m_l_limit_exceeded_exception");
    }
}
