//! Attaches the resolved user info to the request-scoped context

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::api::state::AppState;
use crate::domain::user::OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT;
use crate::domain::ThreadContext;

/// Builds a fresh [`ThreadContext`] per request and stores the user info
/// header value under the security transient key
pub async fn user_context_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let context = build_context(&request, &state.user_info_header);
    request.extensions_mut().insert(context);

    next.run(request).await
}

fn build_context(request: &Request<Body>, header: &str) -> ThreadContext {
    let mut context = ThreadContext::new();

    let Some(value) = request.headers().get(header) else {
        return context;
    };

    match value.to_str() {
        Ok(user_info) => {
            debug!("User info attached to request context");
            if let Err(e) =
                context.put_transient(OPENSEARCH_SECURITY_USER_INFO_THREAD_CONTEXT, user_info)
            {
                warn!(error = %e, "Failed to attach user info");
            }
        }
        Err(_) => warn!(header, "Ignoring user info header with invalid encoding"),
    }

    context
}
