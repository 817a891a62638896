//! ML input entity

use serde::{Deserialize, Serialize};

use super::{AlgoParams, FunctionName, InputDataset};
use crate::domain::MlError;

/// Input for train / predict / train-and-predict requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlInput {
    /// Target algorithm
    algorithm: FunctionName,

    /// Algorithm parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameters: Option<AlgoParams>,

    /// Dataset to run against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_dataset: Option<InputDataset>,
}

impl MlInput {
    pub fn new(algorithm: FunctionName) -> Self {
        Self {
            algorithm,
            parameters: None,
            input_dataset: None,
        }
    }

    pub fn with_parameters(mut self, parameters: AlgoParams) -> Self {
        self.parameters = Some(parameters);
        self
    }

    pub fn with_dataset(mut self, dataset: InputDataset) -> Self {
        self.input_dataset = Some(dataset);
        self
    }

    // Getters

    pub fn algorithm(&self) -> FunctionName {
        self.algorithm
    }

    pub fn parameters(&self) -> Option<&AlgoParams> {
        self.parameters.as_ref()
    }

    pub fn input_dataset(&self) -> Option<&InputDataset> {
        self.input_dataset.as_ref()
    }

    // Setters

    pub fn set_algorithm(&mut self, algorithm: FunctionName) {
        self.algorithm = algorithm;
    }

    pub fn set_parameters(&mut self, parameters: Option<AlgoParams>) {
        self.parameters = parameters;
    }

    /// Reject inputs that cannot be dispatched
    pub fn validate(&self, require_dataset: bool) -> Result<(), MlError> {
        if require_dataset && self.input_dataset.is_none() {
            return Err(MlError::invalid_argument("input data set can't be null"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_requires_dataset() {
        let input = MlInput::new(FunctionName::Kmeans);
        let err = input.validate(true).unwrap_err();
        assert_eq!(err.to_string(), "input data set can't be null");
        assert!(input.validate(false).is_ok());
    }

    #[test]
    fn test_validate_with_dataset() {
        let input = MlInput::new(FunctionName::Kmeans)
            .with_dataset(InputDataset::search_query(vec!["iris".into()], json!({})));
        assert!(input.validate(true).is_ok());
    }

    #[test]
    fn test_serialization_omits_empty_fields() {
        let input = MlInput::new(FunctionName::BatchRcf);
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"algorithm": "BATCH_RCF"}));
    }
}
