//! Connector domain - configuration of external model services

mod entity;

pub use entity::{ConnectorAction, ConnectorProtocol, CreateConnectorInput};
