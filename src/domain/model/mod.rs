//! Model domain - model metadata, registration and model groups

mod entity;
mod group;
mod register;

pub use entity::{Model, ModelFormat, ModelState};
pub use group::{AccessMode, RegisterModelGroupInput};
pub use register::RegisterModelInput;
