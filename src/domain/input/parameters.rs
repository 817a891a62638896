//! Algorithm parameters

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::FunctionName;
use crate::domain::MlError;

/// Distance metric used by k-means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistanceType {
    #[default]
    Euclidean,
    Cosine,
    L1,
}

/// Loss function used by linear regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectiveType {
    SquaredLoss,
    AbsoluteLoss,
    Huber,
}

/// Optimizer used by linear regression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizerType {
    SimpleSgd,
    LinearDecaySgd,
    SqrtDecaySgd,
    AdaGrad,
    AdaDelta,
    Adam,
    RmsProp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KMeansParams {
    #[serde(default, alias = "k", skip_serializing_if = "Option::is_none")]
    pub centroids: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_type: Option<DistanceType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressionParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objective: Option<ObjectiveType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimizer: Option<OptimizerType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub learning_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epochs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRcfParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_trees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shingle_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly_score_threshold: Option<f64>,
}

/// Parameters for the algorithms that accept them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "params_type", rename_all = "snake_case")]
pub enum AlgoParams {
    KMeans(KMeansParams),
    LinearRegression(LinearRegressionParams),
    BatchRcf(BatchRcfParams),
}

impl AlgoParams {
    /// Build parameters for `function` from a flat argument map.
    ///
    /// Keys that do not belong to the algorithm are ignored. Returns `None`
    /// for algorithms without tunable parameters.
    pub fn from_arguments(
        function: FunctionName,
        arguments: &Map<String, Value>,
    ) -> Result<Option<Self>, MlError> {
        let value = Value::Object(arguments.clone());

        let params = match function {
            FunctionName::Kmeans => Self::KMeans(parse(function, value)?),
            FunctionName::LinearRegression => Self::LinearRegression(parse(function, value)?),
            FunctionName::BatchRcf => Self::BatchRcf(parse(function, value)?),
            _ => return Ok(None),
        };

        Ok(Some(params))
    }

    pub fn function_name(&self) -> FunctionName {
        match self {
            Self::KMeans(_) => FunctionName::Kmeans,
            Self::LinearRegression(_) => FunctionName::LinearRegression,
            Self::BatchRcf(_) => FunctionName::BatchRcf,
        }
    }
}

fn parse<T: serde::de::DeserializeOwned>(function: FunctionName, value: Value) -> Result<T, MlError> {
    serde_json::from_value(value).map_err(|e| {
        MlError::invalid_argument(format!("Invalid parameters for {}: {}", function, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_kmeans_from_arguments() {
        let arguments = args(json!({
            "action": "train",
            "k": 3,
            "iterations": 10,
            "distance_type": "COSINE"
        }));

        let params = AlgoParams::from_arguments(FunctionName::Kmeans, &arguments)
            .unwrap()
            .unwrap();

        assert_eq!(
            params,
            AlgoParams::KMeans(KMeansParams {
                centroids: Some(3),
                iterations: Some(10),
                distance_type: Some(DistanceType::Cosine),
            })
        );
        assert_eq!(params.function_name(), FunctionName::Kmeans);
    }

    #[test]
    fn test_linear_regression_from_arguments() {
        let arguments = args(json!({
            "objective": "SQUARED_LOSS",
            "optimizer": "ADAM",
            "learning_rate": 0.01,
            "target": "price"
        }));

        let params = AlgoParams::from_arguments(FunctionName::LinearRegression, &arguments)
            .unwrap()
            .unwrap();

        match params {
            AlgoParams::LinearRegression(p) => {
                assert_eq!(p.optimizer, Some(OptimizerType::Adam));
                assert_eq!(p.target.as_deref(), Some("price"));
                assert!(p.epochs.is_none());
            }
            other => panic!("unexpected params: {:?}", other),
        }
    }

    #[test]
    fn test_algorithm_without_parameters() {
        let arguments = args(json!({"foo": "bar"}));
        let params = AlgoParams::from_arguments(FunctionName::TextEmbedding, &arguments).unwrap();
        assert!(params.is_none());
    }

    #[test]
    fn test_invalid_parameter_value() {
        let arguments = args(json!({"distance_type": "MANHATTAN"}));
        let err = AlgoParams::from_arguments(FunctionName::Kmeans, &arguments).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("Invalid parameters for KMEANS"));
    }

    #[test]
    fn test_tagged_serialization() {
        let params = AlgoParams::BatchRcf(BatchRcfParams {
            number_of_trees: Some(30),
            ..Default::default()
        });
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["params_type"], "batch_rcf");
        assert_eq!(value["number_of_trees"], 30);
        assert!(value.get("shingle_size").is_none());
    }
}
