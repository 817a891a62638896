//! ML input domain - algorithm, parameters and dataset of a task request

mod dataset;
mod entity;
mod function_name;
mod parameters;

pub use dataset::InputDataset;
pub use entity::MlInput;
pub use function_name::FunctionName;
pub use parameters::{
    AlgoParams, BatchRcfParams, DistanceType, KMeansParams, LinearRegressionParams, ObjectiveType,
    OptimizerType,
};
