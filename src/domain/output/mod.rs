//! ML output domain

mod entity;

pub use entity::MlOutput;
