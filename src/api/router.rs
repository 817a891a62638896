use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, user_context_middleware};
use super::ml::{self, ML_BASE_URI};
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest(ML_BASE_URI, ml::create_ml_router())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            user_context_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::{Method, StatusCode};

    use crate::api::ml::test_support::{app, cluster, send};
    use crate::api::state::AppState;
    use crate::client::MockMlClient;

    #[tokio::test]
    async fn test_health_endpoints() {
        let (status, body) = send(app(MockMlClient::new()), Method::GET, "/health", None, &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, _) = send(app(MockMlClient::new()), Method::GET, "/live", None, &[]).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(app(MockMlClient::new()), Method::GET, "/ready", None, &[]).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"][0]["name"], "cluster");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let state = AppState::new(Arc::new(MockMlClient::new()), Arc::new(cluster()));
        let (status, _) = send(
            super::create_router_with_state(state),
            Method::GET,
            "/_plugins/_ml/unknown",
            None,
            &[],
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
