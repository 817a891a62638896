//! Algorithm (function) names understood by the remote executor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::MlError;

/// Algorithm identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FunctionName {
    LinearRegression,
    LogisticRegression,
    Kmeans,
    BatchRcf,
    FitRcf,
    AnomalyLocalization,
    RcfSummarize,
    TextEmbedding,
    SparseEncoding,
    SparseTokenize,
    TextSimilarity,
    QuestionAnswering,
    Remote,
    Agent,
}

impl FunctionName {
    pub const ALL: [FunctionName; 14] = [
        Self::LinearRegression,
        Self::LogisticRegression,
        Self::Kmeans,
        Self::BatchRcf,
        Self::FitRcf,
        Self::AnomalyLocalization,
        Self::RcfSummarize,
        Self::TextEmbedding,
        Self::SparseEncoding,
        Self::SparseTokenize,
        Self::TextSimilarity,
        Self::QuestionAnswering,
        Self::Remote,
        Self::Agent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinearRegression => "LINEAR_REGRESSION",
            Self::LogisticRegression => "LOGISTIC_REGRESSION",
            Self::Kmeans => "KMEANS",
            Self::BatchRcf => "BATCH_RCF",
            Self::FitRcf => "FIT_RCF",
            Self::AnomalyLocalization => "ANOMALY_LOCALIZATION",
            Self::RcfSummarize => "RCF_SUMMARIZE",
            Self::TextEmbedding => "TEXT_EMBEDDING",
            Self::SparseEncoding => "SPARSE_ENCODING",
            Self::SparseTokenize => "SPARSE_TOKENIZE",
            Self::TextSimilarity => "TEXT_SIMILARITY",
            Self::QuestionAnswering => "QUESTION_ANSWERING",
            Self::Remote => "REMOTE",
            Self::Agent => "AGENT",
        }
    }

    /// Models served by a deployed model rather than trained in place
    pub fn is_deploy_required(&self) -> bool {
        matches!(
            self,
            Self::TextEmbedding
                | Self::SparseEncoding
                | Self::SparseTokenize
                | Self::TextSimilarity
                | Self::QuestionAnswering
                | Self::Remote
        )
    }
}

impl fmt::Display for FunctionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FunctionName {
    type Err = MlError;

    /// Case-insensitive; `-` is accepted in place of `_`
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase().replace('-', "_");

        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == normalized)
            .ok_or_else(|| MlError::invalid_argument(format!("Wrong function name: {}", value)))
    }
}
