//! Cluster domain - membership snapshot and its source

mod entity;
mod service;

pub use entity::{ClusterState, DiscoveryNode, DiscoveryNodes, NodeRole};
pub use service::ClusterService;

#[cfg(test)]
pub use service::MockClusterService;
