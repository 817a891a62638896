//! ML node client
//!
//! Typed facade over the remote ML actions of a cluster:
//! - train / predict / train-and-predict and the combined `run`
//! - model, model group, task and connector management
//! - REST surface and parameter helpers in front of the facade

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use api::state::AppState;
use client::{MlClient, NodeClient};
use config::RemoteConfig;
use infrastructure::cluster::StaticClusterService;
use infrastructure::transport::HttpActionExecutor;
use tracing::info;

/// Client dispatching to the configured remote executor
pub fn create_client(remote: &RemoteConfig) -> anyhow::Result<Arc<dyn MlClient>> {
    let executor = HttpActionExecutor::new(
        remote.base_url.clone(),
        Duration::from_millis(remote.timeout_ms),
    )?;

    info!(base_url = %remote.base_url, timeout_ms = remote.timeout_ms, "Remote executor configured");

    Ok(Arc::new(NodeClient::new(Arc::new(executor))))
}

/// Application state from configuration
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = create_client(&config.remote)?;
    let cluster_service = Arc::new(StaticClusterService::from_config(&config.cluster));

    info!(
        cluster = %config.cluster.name,
        nodes = config.cluster.nodes.len(),
        "Cluster view loaded"
    );

    Ok(AppState::new(client, cluster_service)
        .with_user_info_header(&config.security.user_info_header))
}
