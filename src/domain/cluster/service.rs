//! Access to the current cluster state

use super::ClusterState;

#[cfg(test)]
use mockall::automock;

/// Source of cluster state snapshots
#[cfg_attr(test, automock)]
pub trait ClusterService: Send + Sync {
    /// Current cluster state
    fn state(&self) -> ClusterState;
}
