//! Input datasets carried by an ML input

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dataset a train/predict request runs against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input_data_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InputDataset {
    /// Rows resolved on the remote side from a search over `indices`
    SearchQuery {
        indices: Vec<String>,
        #[serde(default)]
        query: Value,
    },

    /// Inline tabular rows
    DataFrame { rows: Vec<Map<String, Value>> },

    /// Inline text documents (embedding and similar models)
    TextDocs { docs: Vec<String> },
}

impl InputDataset {
    pub fn search_query(indices: Vec<String>, query: Value) -> Self {
        Self::SearchQuery { indices, query }
    }

    pub fn data_frame(rows: Vec<Map<String, Value>>) -> Self {
        Self::DataFrame { rows }
    }

    pub fn text_docs(docs: Vec<String>) -> Self {
        Self::TextDocs { docs }
    }

    /// Number of inline records, `None` for search-backed datasets
    pub fn inline_len(&self) -> Option<usize> {
        match self {
            Self::SearchQuery { .. } => None,
            Self::DataFrame { rows } => Some(rows.len()),
            Self::TextDocs { docs } => Some(docs.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_query_tagging() {
        let dataset = InputDataset::search_query(vec!["iris".to_string()], json!({"match_all": {}}));
        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["input_data_type"], "SEARCH_QUERY");
        assert_eq!(value["indices"][0], "iris");
        assert_eq!(dataset.inline_len(), None);
    }

    #[test]
    fn test_data_frame_from_json() {
        let value = json!({
            "input_data_type": "DATA_FRAME",
            "rows": [{"k1": 1.0}, {"k1": 2.0}]
        });
        let dataset: InputDataset = serde_json::from_value(value).unwrap();
        assert_eq!(dataset.inline_len(), Some(2));
    }
}
