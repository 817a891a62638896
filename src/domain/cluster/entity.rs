//! Cluster membership as seen by this node

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Role a cluster member plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    ClusterManager,
    Data,
    Ingest,
    Ml,
    CoordinatingOnly,
}

/// A cluster member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roles: BTreeSet<NodeRole>,
}

impl DiscoveryNode {
    pub fn new(id: impl Into<String>, roles: impl IntoIterator<Item = NodeRole>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            roles: roles.into_iter().collect(),
        }
    }

    pub fn is_data_node(&self) -> bool {
        self.roles.contains(&NodeRole::Data)
    }

    pub fn is_ml_node(&self) -> bool {
        self.roles.contains(&NodeRole::Ml)
    }
}

/// All members of the cluster, keyed by node id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryNodes {
    nodes: BTreeMap<String, DiscoveryNode>,
}

impl DiscoveryNodes {
    pub fn new(nodes: impl IntoIterator<Item = DiscoveryNode>) -> Self {
        Self {
            nodes: nodes.into_iter().map(|n| (n.id.clone(), n)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DiscoveryNode> {
        self.nodes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiscoveryNode> {
        self.nodes.values()
    }

    /// Members holding data
    pub fn data_nodes(&self) -> impl Iterator<Item = &DiscoveryNode> {
        self.iter().filter(|n| n.is_data_node())
    }
}

/// Snapshot of the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterState {
    pub cluster_name: String,
    nodes: DiscoveryNodes,
}

impl ClusterState {
    pub fn new(cluster_name: impl Into<String>, nodes: DiscoveryNodes) -> Self {
        Self {
            cluster_name: cluster_name.into(),
            nodes,
        }
    }

    pub fn nodes(&self) -> &DiscoveryNodes {
        &self.nodes
    }
}
