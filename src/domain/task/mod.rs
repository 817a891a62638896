//! Task domain

mod entity;

pub use entity::{Task, TaskState, TaskType};
