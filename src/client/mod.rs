//! Client facade - typed operations dispatched to remote ML actions

pub mod action;
pub mod executor;
pub mod listener;
pub mod ml_client;
pub mod node_client;
pub mod run;
pub mod transport;

pub use action::ActionType;
pub use executor::{execute_action, ActionExecutor};
pub use listener::{listen, ActionListener};
pub use ml_client::MlClient;
pub use node_client::NodeClient;
pub use run::{RunAction, RunArgs, RunPlan};
pub use transport::{
    CreateConnectorResponse, DeleteResponse, DeployModelResponse, ProfileRequest, ProfileResponse,
    RegisterModelGroupResponse, RegisterModelResponse,
};

#[cfg(test)]
pub use executor::MockActionExecutor;
#[cfg(test)]
pub use ml_client::MockMlClient;
