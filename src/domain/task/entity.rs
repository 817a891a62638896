//! Task entity as tracked by the remote side

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::input::FunctionName;

/// State of a remote task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Created,
    Running,
    Completed,
    Failed,
    Cancelled,
    CompletedWithError,
}

impl TaskState {
    /// Check if this state is final
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Cancelled | Self::CompletedWithError
        )
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Running => write!(f, "RUNNING"),
            Self::Completed => write!(f, "COMPLETED"),
            Self::Failed => write!(f, "FAILED"),
            Self::Cancelled => write!(f, "CANCELLED"),
            Self::CompletedWithError => write!(f, "COMPLETED_WITH_ERROR"),
        }
    }
}

/// Kind of work a task performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Training,
    Prediction,
    TrainingAndPrediction,
    Execution,
    RegisterModel,
    DeployModel,
}

/// A remote task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,

    pub task_type: TaskType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<FunctionName>,

    pub state: TaskState,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<f32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub worker_node: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default)]
    pub is_async: bool,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_time: Option<DateTime<Utc>>,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update_time: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(task_type: TaskType, state: TaskState) -> Self {
        Self {
            task_id: None,
            model_id: None,
            task_type,
            function_name: None,
            state,
            progress: None,
            worker_node: Vec::new(),
            error: None,
            is_async: false,
            create_time: None,
            last_update_time: None,
        }
    }

    pub fn with_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
