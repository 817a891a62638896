//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, ClusterConfig, LogFormat, LoggingConfig, RemoteConfig, SecurityConfig, ServerConfig,
};
