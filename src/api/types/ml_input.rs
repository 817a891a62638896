//! REST body of train / predict requests

use axum::body::Bytes;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{ApiError, PARSE_EXCEPTION};
use crate::domain::{AlgoParams, FunctionName, InputDataset, MlError, MlInput};

/// Train / predict body; the algorithm comes from the path
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MlInputBody {
    #[serde(default)]
    pub parameters: Map<String, Value>,

    #[serde(default)]
    pub input_query: Option<Value>,

    #[serde(default)]
    pub input_index: Vec<String>,

    #[serde(default)]
    pub input_data: Option<Vec<Map<String, Value>>>,

    #[serde(default)]
    pub text_docs: Option<Vec<String>>,
}

impl MlInputBody {
    /// Parse a request body; an empty body means no input at all
    pub fn from_bytes(body: &Bytes) -> Result<Option<Self>, ApiError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        serde_json::from_slice(body).map(Some).map_err(|e| {
            ApiError::new(
                axum::http::StatusCode::BAD_REQUEST,
                PARSE_EXCEPTION,
                format!("Invalid JSON data: {}", e),
            )
        })
    }

    /// Build the input for `algorithm`.
    ///
    /// Search-backed datasets take precedence over inline rows, inline rows
    /// over text documents.
    pub fn into_ml_input(self, algorithm: FunctionName) -> Result<MlInput, MlError> {
        let mut input = MlInput::new(algorithm);

        if !self.parameters.is_empty() {
            input.set_parameters(AlgoParams::from_arguments(algorithm, &self.parameters)?);
        }

        let dataset = if !self.input_index.is_empty() {
            Some(InputDataset::search_query(
                self.input_index,
                self.input_query.unwrap_or(Value::Null),
            ))
        } else if let Some(rows) = self.input_data {
            Some(InputDataset::data_frame(rows))
        } else {
            self.text_docs.map(InputDataset::text_docs)
        };

        Ok(match dataset {
            Some(dataset) => input.with_dataset(dataset),
            None => input,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> MlInputBody {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_search_query_body() {
        let input = body(json!({
            "parameters": {"centroids": 3},
            "input_query": {"query": {"match_all": {}}, "size": 10},
            "input_index": ["iris_data"]
        }))
        .into_ml_input(FunctionName::Kmeans)
        .unwrap();

        assert!(input.parameters().is_some());
        match input.input_dataset() {
            Some(InputDataset::SearchQuery { indices, query }) => {
                assert_eq!(indices, &vec!["iris_data".to_string()]);
                assert_eq!(query["size"], 10);
            }
            other => panic!("unexpected dataset: {:?}", other),
        }
    }

    #[test]
    fn test_text_docs_body() {
        let input = body(json!({"text_docs": ["hello", "world"]}))
            .into_ml_input(FunctionName::TextEmbedding)
            .unwrap();

        assert_eq!(input.input_dataset().and_then(|d| d.inline_len()), Some(2));
        assert!(input.parameters().is_none());
    }

    #[test]
    fn test_body_without_dataset() {
        let input = body(json!({})).into_ml_input(FunctionName::Kmeans).unwrap();
        assert!(input.validate(true).is_err());
    }

    #[test]
    fn test_invalid_parameters() {
        let err = body(json!({"parameters": {"iterations": "many"}}))
            .into_ml_input(FunctionName::Kmeans)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_empty_bytes_is_no_input() {
        assert!(MlInputBody::from_bytes(&Bytes::from_static(b"  ")).unwrap().is_none());
        assert!(MlInputBody::from_bytes(&Bytes::from_static(b"{}")).unwrap().is_some());
        assert!(MlInputBody::from_bytes(&Bytes::from_static(b"{oops")).is_err());
    }
}
