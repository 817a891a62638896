//! Connector endpoints

use axum::extract::State;
use tracing::info;

use super::requesting_user;
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::client::CreateConnectorResponse;
use crate::domain::CreateConnectorInput;

/// POST /_plugins/_ml/connectors/_create
pub async fn create_connector(
    State(state): State<AppState>,
    request: RestRequest,
    Json(input): Json<CreateConnectorInput>,
) -> Result<Json<CreateConnectorResponse>, ApiError> {
    info!(
        user = %requesting_user(&request),
        name = %input.name,
        actions = input.actions.len(),
        "Creating connector"
    );

    let response = state.client.create_connector(input).await?;
    Ok(Json(response))
}
