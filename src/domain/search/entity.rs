//! Search request and response shapes forwarded to the model/task indices

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `_source` filtering of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SourceRepr", into = "SourceRepr")]
pub struct FetchSourceContext {
    pub fetch_source: bool,
    pub includes: Vec<String>,
    pub excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(includes: Vec<String>, excludes: Vec<String>) -> Self {
        Self {
            fetch_source: true,
            includes,
            excludes,
        }
    }

    /// Fetch the whole document
    pub fn fetch_all() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Do not fetch the document at all
    pub fn do_not_fetch() -> Self {
        Self {
            fetch_source: false,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }
}

/// Every shape `_source` accepts on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SourceRepr {
    Flag(bool),
    Single(String),
    List(Vec<String>),
    Filter {
        #[serde(default)]
        includes: Vec<String>,
        #[serde(default)]
        excludes: Vec<String>,
    },
}

impl From<SourceRepr> for FetchSourceContext {
    fn from(repr: SourceRepr) -> Self {
        match repr {
            SourceRepr::Flag(true) => Self::fetch_all(),
            SourceRepr::Flag(false) => Self::do_not_fetch(),
            SourceRepr::Single(field) => Self::new(vec![field], Vec::new()),
            SourceRepr::List(fields) => Self::new(fields, Vec::new()),
            SourceRepr::Filter { includes, excludes } => Self::new(includes, excludes),
        }
    }
}

impl From<FetchSourceContext> for SourceRepr {
    fn from(ctx: FetchSourceContext) -> Self {
        if !ctx.fetch_source {
            return SourceRepr::Flag(false);
        }

        SourceRepr::Filter {
            includes: ctx.includes,
            excludes: ctx.excludes,
        }
    }
}

/// Body of a search (the search source builder)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    #[serde(default, rename = "_source", skip_serializing_if = "Option::is_none")]
    pub fetch_source: Option<FetchSourceContext>,

    /// size, from, sort, aggregations and the like, forwarded untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SearchSource {
    pub fn with_query(mut self, query: Value) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_fetch_source(mut self, fetch_source: FetchSourceContext) -> Self {
        self.fetch_source = Some(fetch_source);
        self
    }
}

/// A search over one of the ML system indices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<String>,

    pub source: SearchSource,
}

impl SearchRequest {
    pub fn new(source: SearchSource) -> Self {
        Self {
            indices: Vec::new(),
            source,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalHits {
    pub value: u64,
    #[serde(default = "default_relation")]
    pub relation: String,
}

fn default_relation() -> String {
    "eq".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(rename = "_index", default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<TotalHits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub took: u64,
    #[serde(default)]
    pub timed_out: bool,
    pub hits: SearchHits,
}

impl SearchResponse {
    pub fn ids(&self) -> Vec<&str> {
        self.hits.hits.iter().map(|hit| hit.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_source_filter_shapes() {
        let ctx: FetchSourceContext = serde_json::from_value(json!(false)).unwrap();
        assert!(!ctx.fetch_source);

        let ctx: FetchSourceContext = serde_json::from_value(json!("name")).unwrap();
        assert_eq!(ctx.includes, vec!["name"]);

        let ctx: FetchSourceContext = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(ctx.includes.len(), 2);
        assert!(ctx.excludes.is_empty());

        let ctx: FetchSourceContext =
            serde_json::from_value(json!({"includes": ["a"], "excludes": ["b"]})).unwrap();
        assert_eq!(ctx, FetchSourceContext::new(vec!["a".into()], vec!["b".into()]));
    }

    #[test]
    fn test_search_source_passthrough() {
        let body = json!({
            "query": {"match_all": {}},
            "size": 1000,
            "sort": [{"created_time": "desc"}],
            "_source": {"excludes": ["model_content"]}
        });

        let source: SearchSource = serde_json::from_value(body).unwrap();
        assert_eq!(source.extra["size"], 1000);
        assert_eq!(source.fetch_source.as_ref().unwrap().excludes, vec!["model_content"]);

        let back = serde_json::to_value(&source).unwrap();
        assert_eq!(back["sort"][0]["created_time"], "desc");
        assert_eq!(back["_source"]["excludes"][0], "model_content");
    }

    #[test]
    fn test_search_response_ids() {
        let response: SearchResponse = serde_json::from_value(json!({
            "took": 3,
            "hits": {
                "total": {"value": 2, "relation": "eq"},
                "hits": [
                    {"_index": ".plugins-ml-model", "_id": "m-1", "_source": {"name": "a"}},
                    {"_index": ".plugins-ml-model", "_id": "m-2", "_source": {"name": "b"}}
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.ids(), vec!["m-1", "m-2"]);
        assert_eq!(response.hits.total.unwrap().value, 2);
    }
}
