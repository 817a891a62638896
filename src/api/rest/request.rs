//! Inbound REST request view used by the parameter helpers

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query, RawPathParams},
    http::{request::Parts, HeaderMap, HeaderName, HeaderValue, Method},
};

use crate::api::types::ApiError;
use crate::domain::ThreadContext;

/// Method, path, merged path and query parameters, headers and the
/// request-scoped context of one REST call
#[derive(Debug, Clone, Default)]
pub struct RestRequest {
    pub method: Method,
    pub path: String,
    params: HashMap<String, String>,
    headers: HeaderMap,
    context: ThreadContext,
}

impl RestRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Headers with invalid names or values are skipped
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    pub fn with_context(mut self, context: ThreadContext) -> Self {
        self.context = context;
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// First value of a header, case-insensitive
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn context(&self) -> &ThreadContext {
        &self.context
    }
}

impl<S> FromRequestParts<S> for RestRequest
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::bad_request(format!("Invalid query string: {}", e)))?;

        // Path parameters win over query parameters of the same name
        if let Ok(path_params) = RawPathParams::from_request_parts(parts, state).await {
            for (name, value) in &path_params {
                params.insert(name.to_string(), value.to_string());
            }
        }

        Ok(Self {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            params,
            headers: parts.headers.clone(),
            context: parts
                .extensions
                .get::<ThreadContext>()
                .cloned()
                .unwrap_or_default(),
        })
    }
}
