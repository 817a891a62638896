//! Request logging with redaction of credentials and user info

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::api::state::AppState;

const REDACTED: &str = "[REDACTED]";

/// Request id headers, in order of preference
const REQUEST_ID_HEADERS: [&str; 2] = ["x-opaque-id", "x-request-id"];

const LOGGED_HEADERS: [&str; 5] = [
    "content-type",
    "content-length",
    "user-agent",
    "x-forwarded-for",
    "authorization",
];

/// Logs each REST call on arrival and completion.
///
/// Spans come from `TraceLayer`; this middleware only emits events.
pub async fn logging_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = matched_path(&request);
    let request_id = request_id(request.headers());
    let headers = loggable_headers(request.headers(), &state.user_info_header);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers,
        "Incoming request"
    );

    let response = next.run(request).await;

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = %request_id,
        "Request completed"
    );

    response
}

fn matched_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn request_id(headers: &HeaderMap) -> String {
    REQUEST_ID_HEADERS
        .iter()
        .find_map(|name| headers.get(*name).and_then(|v| v.to_str().ok()))
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

/// `name=value` pairs of the logged headers; credentials and the user info
/// header are never written out
fn loggable_headers(headers: &HeaderMap, user_info_header: &str) -> String {
    let mut parts = Vec::new();

    for (name, value) in headers {
        let name = name.as_str();

        if name.eq_ignore_ascii_case(user_info_header) || name == "authorization" {
            parts.push(format!("{}={}", name, REDACTED));
        } else if LOGGED_HEADERS.contains(&name) {
            parts.push(format!("{}={}", name, value.to_str().unwrap_or("[invalid]")));
        }
    }

    parts.join(", ")
}
