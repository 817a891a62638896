use serde::Deserialize;

use crate::domain::{ClusterState, DiscoveryNode, DiscoveryNodes, NodeRole};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub remote: RemoteConfig,
    pub cluster: ClusterConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Where remote actions are executed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

/// Static view of the cluster membership
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub name: String,
    pub nodes: Vec<DiscoveryNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Header carrying the resolved `name|backend_roles|roles|tenant` user info
    pub user_info_header: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 9200,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9300".to_string(),
            timeout_ms: 30_000,
        }
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            name: "ml-cluster".to_string(),
            nodes: vec![DiscoveryNode::new(
                "node-1",
                [NodeRole::ClusterManager, NodeRole::Data, NodeRole::Ml],
            )],
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            user_info_header: "x-security-user-info".to_string(),
        }
    }
}

impl ClusterConfig {
    pub fn to_state(&self) -> ClusterState {
        ClusterState::new(
            self.name.clone(),
            DiscoveryNodes::new(self.nodes.iter().cloned()),
        )
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 9200);
        assert_eq!(config.remote.timeout_ms, 30_000);
        assert!(matches!(config.logging.format, LogFormat::Pretty));
    }

    #[test]
    fn test_cluster_state_from_config() {
        let config = ClusterConfig {
            name: "test".to_string(),
            nodes: vec![
                DiscoveryNode::new("d1", [NodeRole::Data]),
                DiscoveryNode::new("m1", [NodeRole::ClusterManager]),
            ],
        };

        let state = config.to_state();
        assert_eq!(state.cluster_name, "test");
        assert_eq!(state.nodes().len(), 2);
        assert_eq!(state.nodes().data_nodes().count(), 1);
    }

    #[test]
    fn test_partial_sections_deserialize() {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "remote": {"base_url": "http://ml:9300"},
            "logging": {"format": "json"}
        }))
        .unwrap();

        assert_eq!(config.remote.base_url, "http://ml:9300");
        assert_eq!(config.remote.timeout_ms, 30_000);
        assert!(matches!(config.logging.format, LogFormat::Json));
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
