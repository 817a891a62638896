//! Profile endpoint

use axum::extract::State;
use tracing::debug;

use super::requesting_user;
use crate::api::rest::utils::{get_all_nodes, split_comma_separated_param, PARAMETER_NODE_IDS};
use crate::api::rest::RestRequest;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::client::{ProfileRequest, ProfileResponse};

/// GET /_plugins/_ml/profile?node_ids=a,b
///
/// Without `node_ids` every data node is profiled.
pub async fn get_profile(
    State(state): State<AppState>,
    request: RestRequest,
) -> Result<Json<ProfileResponse>, ApiError> {
    let mut node_ids = split_comma_separated_param(&request, PARAMETER_NODE_IDS);
    if node_ids.is_empty() {
        node_ids = get_all_nodes(state.cluster_service.as_ref());
    }

    debug!(user = %requesting_user(&request), nodes = node_ids.len(), "Profiling nodes");

    let profile = ProfileRequest {
        node_ids,
        return_all_tasks: true,
        return_all_models: true,
    };

    let response = state.client.profile(profile).await?;
    Ok(Json(response))
}
