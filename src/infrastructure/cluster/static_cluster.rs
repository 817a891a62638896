use crate::config::ClusterConfig;
use crate::domain::{ClusterService, ClusterState};

/// Cluster service over a fixed membership list
#[derive(Debug, Clone)]
pub struct StaticClusterService {
    state: ClusterState,
}

impl StaticClusterService {
    pub fn new(state: ClusterState) -> Self {
        Self { state }
    }

    pub fn from_config(config: &ClusterConfig) -> Self {
        Self::new(config.to_state())
    }
}

impl ClusterService for StaticClusterService {
    fn state(&self) -> ClusterState {
        self.state.clone()
    }
}
