//! Application state shared by the handlers

use std::sync::Arc;

use crate::client::MlClient;
use crate::domain::ClusterService;

/// Services behind the REST surface, using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<dyn MlClient>,
    pub cluster_service: Arc<dyn ClusterService>,
    /// Header the user info is read from
    pub user_info_header: Arc<str>,
}

impl AppState {
    pub fn new(client: Arc<dyn MlClient>, cluster_service: Arc<dyn ClusterService>) -> Self {
        Self {
            client,
            cluster_service,
            user_info_header: Arc::from("x-security-user-info"),
        }
    }

    pub fn with_user_info_header(mut self, header: impl AsRef<str>) -> Self {
        self.user_info_header = Arc::from(header.as_ref().to_ascii_lowercase());
        self
    }
}
