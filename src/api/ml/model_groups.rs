//! Model group endpoints

use axum::extract::State;
use tracing::info;

use super::requesting_user;
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::client::RegisterModelGroupResponse;
use crate::domain::RegisterModelGroupInput;

/// POST /_plugins/_ml/model_groups/_register
pub async fn register_model_group(
    State(state): State<AppState>,
    request: RestRequest,
    Json(input): Json<RegisterModelGroupInput>,
) -> Result<Json<RegisterModelGroupResponse>, ApiError> {
    info!(
        user = %requesting_user(&request),
        name = %input.name,
        "Registering model group"
    );

    let response = state.client.register_model_group(input).await?;
    Ok(Json(response))
}
