//! Domain layer - value objects exchanged with the remote ML executor

pub mod cluster;
pub mod connector;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod search;
pub mod task;
pub mod user;

pub use cluster::{ClusterService, ClusterState, DiscoveryNode, DiscoveryNodes, NodeRole};
pub use connector::{ConnectorAction, ConnectorProtocol, CreateConnectorInput};
pub use error::{MlError, RemoteError};
pub use input::{AlgoParams, FunctionName, InputDataset, MlInput};
pub use model::{
    AccessMode, Model, ModelFormat, ModelState, RegisterModelGroupInput, RegisterModelInput,
};
pub use output::MlOutput;
pub use search::{FetchSourceContext, SearchRequest, SearchResponse, SearchSource};
pub use task::{Task, TaskState, TaskType};
pub use user::{ThreadContext, User};
