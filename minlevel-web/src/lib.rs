pub mod api;
pub mod config;
pub mod probe;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the Axum router with all routes
pub fn build_router(state: Arc<AppState>) -> Router {
    let log_routes = Router::new()
        .route("/promote/not-info", get(api::promote_not_info))
        .route("/promote/error", get(api::promote_error))
        .route("/above/not-info", get(api::above_not_info))
        .route("/above/warn", get(api::above_warn))
        .route("/below/trace", get(api::below_trace))
        .route("/below/child/trace", get(api::below_child_trace))
        .route("/bydefault/info", get(api::bydefault_info))
        .route("/bydefault/not-trace", get(api::bydefault_not_trace));

    Router::new()
        .route("/health", get(api::health))
        .nest("/log", log_routes)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use minlevel_logging::{LoggingConfig, LoggingDispatch};
    use tower::ServiceExt;

    fn test_state() -> Arc<AppState> {
        AppState::new(LoggingDispatch::for_tests(LoggingConfig::default()))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());

        let response = app.oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_response_body() {
        let app = build_router(test_state());

        let response = app.oneshot(get("/health")).await.unwrap();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_probe_responds_with_plain_text() {
        let app = build_router(test_state());

        let response = app.oneshot(get("/log/promote/error")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/plain"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"true");
    }

    #[tokio::test]
    async fn test_unknown_probe_returns_404() {
        let app = build_router(test_state());

        let response = app.oneshot(get("/log/promote/debug")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_probe_rejects_post() {
        let app = build_router(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/log/promote/error")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
