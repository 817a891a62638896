//! Infrastructure layer - External service implementations

pub mod cluster;
pub mod logging;
pub mod transport;
