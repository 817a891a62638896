//! Cluster state sources

mod static_cluster;

pub use static_cluster::StaticClusterService;
