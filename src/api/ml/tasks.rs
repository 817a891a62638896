//! Task endpoints

use axum::{body::Bytes, extract::State};
use tracing::{debug, info};

use super::{invalid_request, requesting_user, search_source_of};
use crate::api::rest::utils::{get_parameter_id, get_source_context, PARAMETER_TASK_ID};
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::client::DeleteResponse;
use crate::domain::{SearchRequest, SearchResponse, Task};

/// GET /_plugins/_ml/tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<Task>, ApiError> {
    let task_id = get_parameter_id(&request, PARAMETER_TASK_ID).map_err(invalid_request)?;

    debug!(user = %requesting_user(&request), task_id = %task_id, "Getting task");

    let task = state.client.get_task(&task_id).await?;
    Ok(Json(task))
}

/// DELETE /_plugins/_ml/tasks/{task_id}
pub async fn delete_task(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<DeleteResponse>, ApiError> {
    let task_id = get_parameter_id(&request, PARAMETER_TASK_ID).map_err(invalid_request)?;

    info!(user = %requesting_user(&request), task_id = %task_id, "Deleting task");

    let response = state.client.delete_task(&task_id).await?;
    Ok(Json(response))
}

/// POST /_plugins/_ml/tasks/_search
pub async fn search_tasks(
    State(state): State<AppState>,
    request: RestRequest,
    body: Bytes,
) -> Result<Json<SearchResponse>, ApiError> {
    let mut source = search_source_of(&body)?;
    source.fetch_source = Some(get_source_context(&request, &source));

    debug!(user = %requesting_user(&request), "Searching tasks");

    let response = state.client.search_task(SearchRequest::new(source)).await?;
    Ok(Json(response))
}
