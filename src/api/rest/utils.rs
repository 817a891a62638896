//! Parameter extraction helpers shared by the REST handlers

use axum::http::StatusCode;
use tracing::error;

use super::RestRequest;
use crate::api::types::ApiError;
use crate::domain::user::OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT;
use crate::domain::{ClusterService, FetchSourceContext, MlError, SearchSource, ThreadContext, User};

pub const PARAMETER_ALGORITHM: &str = "algorithm";
pub const PARAMETER_ASYNC: &str = "async";
pub const PARAMETER_MODEL_ID: &str = "model_id";
pub const PARAMETER_TASK_ID: &str = "task_id";
pub const PARAMETER_RETURN_CONTENT: &str = "return_content";
pub const PARAMETER_NODE_IDS: &str = "node_ids";

pub const OPENSEARCH_DASHBOARDS_USER_AGENT: &str = "OpenSearch Dashboards";
pub const UI_METADATA_EXCLUDE: &[&str] = &["ui_metadata"];
pub const MODEL_CONTENT_FIELD: &str = "model_content";

/// Required `algorithm` parameter
pub fn get_algorithm(request: &RestRequest) -> Result<String, MlError> {
    match request.param(PARAMETER_ALGORITHM) {
        Some(algorithm) if !algorithm.is_empty() => Ok(algorithm.to_string()),
        _ => Err(MlError::invalid_argument("Request should contain algorithm!")),
    }
}

/// Optional `async` flag, false when absent
pub fn is_async(request: &RestRequest) -> Result<bool, MlError> {
    bool_param(request, PARAMETER_ASYNC, false)
}

/// Optional `return_content` flag, false when absent
pub fn is_return_content(request: &RestRequest) -> Result<bool, MlError> {
    bool_param(request, PARAMETER_RETURN_CONTENT, false)
}

/// Required, non-empty parameter `name`
pub fn get_parameter_id(request: &RestRequest, name: &str) -> Result<String, MlError> {
    match request.param(name) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(MlError::invalid_argument(format!(
            "Request should contain {}",
            name
        ))),
    }
}

/// Source filter of a search over ML documents.
///
/// An explicit filter always gets the UI metadata exclusion added. Without
/// one, the dashboards UI fetches everything and other callers get the
/// default exclusions.
pub fn get_source_context(request: &RestRequest, source: &SearchSource) -> FetchSourceContext {
    let Some(requested) = source.fetch_source.clone() else {
        let from_dashboards = request
            .header("user-agent")
            .is_some_and(|agent| agent.contains(OPENSEARCH_DASHBOARDS_USER_AGENT));

        return if from_dashboards {
            FetchSourceContext::fetch_all()
        } else {
            FetchSourceContext::new(Vec::new(), default_excludes())
        };
    };

    let mut excludes = requested.excludes;
    for field in UI_METADATA_EXCLUDE {
        if !excludes.iter().any(|e| e == field) {
            excludes.push(field.to_string());
        }
    }

    FetchSourceContext {
        excludes,
        ..requested
    }
}

fn default_excludes() -> Vec<String> {
    UI_METADATA_EXCLUDE.iter().map(|f| f.to_string()).collect()
}

/// Source filter of a model fetch; model content is only returned on request
pub fn get_fetch_source_context(return_content: bool) -> FetchSourceContext {
    if return_content {
        FetchSourceContext::fetch_all()
    } else {
        FetchSourceContext::new(Vec::new(), vec![MODEL_CONTENT_FIELD.to_string()])
    }
}

/// Comma separated values of `name`; empty tokens are dropped
pub fn split_comma_separated_param(request: &RestRequest, name: &str) -> Vec<String> {
    request
        .param(name)
        .map(|value| {
            value
                .split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

pub fn get_string_param(request: &RestRequest, name: &str) -> Option<String> {
    request.param(name).map(String::from)
}

/// User resolved by the security layer for this request, if any
pub fn get_user_context(context: &ThreadContext) -> Option<User> {
    context
        .get_transient(OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT)
        .and_then(User::parse)
}

/// Ids of every data node in the current cluster state
pub fn get_all_nodes(cluster_service: &dyn ClusterService) -> Vec<String> {
    cluster_service
        .state()
        .nodes()
        .data_nodes()
        .map(|node| node.id.clone())
        .collect()
}

/// Log a failed REST call and build its error response with `status`
pub fn on_failure(status: StatusCode, message: &str, error: MlError) -> ApiError {
    error!(status = status.as_u16(), error = %error, "{}", message);

    let mut api_error = ApiError::from(error);
    api_error.status = status;
    api_error.response.status = status.as_u16();
    api_error
}

fn bool_param(request: &RestRequest, name: &str, default: bool) -> Result<bool, MlError> {
    match request.param(name) {
        None => Ok(default),
        Some(value) => match value.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(MlError::invalid_argument(format!(
                "Failed to parse value [{}] of [{}] as only [true] or [false] are allowed.",
                value, name
            ))),
        },
    }
}
