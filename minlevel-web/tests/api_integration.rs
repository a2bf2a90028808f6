
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use fixture::ConfigFixture;
use minlevel_logging::LoggingDispatch;
use minlevel_web::config::ProbeConfig;
use minlevel_web::state::AppState;

const PROMOTE: &str = "minlevel_web::probe::promote";

/// Make a GET request against a state and return the plain-text body
async fn get_text(state: &Arc<AppState>, path: &str) -> (StatusCode, String) {
    let app = minlevel_web::build_router(state.clone());

    let response = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

async fn assert_probe(state: &Arc<AppState>, path: &str, expected: &str) {
    let (status, body) = get_text(state, path).await;
    assert_eq!(status, StatusCode::OK, "{}", path);
    assert_eq!(body, expected, "{}", path);
}

#[tokio::test]
async fn test_promote_with_min_level_warn() {
    let state = ConfigFixture::new()
        .root("DEBUG", "INFO")
        .category(PROMOTE, Some("WARN"), None)
        .state();

    assert_probe(&state, "/log/promote/not-info", "true").await;
    assert_probe(&state, "/log/promote/error", "true").await;
}

#[tokio::test]
async fn test_promote_with_root_min_level_warn() {
    let state = ConfigFixture::new().root("WARN", "INFO").state();

    assert_probe(&state, "/log/promote/not-info", "true").await;
    assert_probe(&state, "/log/promote/error", "true").await;
}

#[tokio::test]
async fn test_promote_not_info_false_when_info_enabled() {
    let state = ConfigFixture::new().root("DEBUG", "INFO").state();

    assert_probe(&state, "/log/promote/not-info", "false").await;
}

#[tokio::test]
async fn test_promote_not_info_false_at_debug() {
    let state = ConfigFixture::new().root("TRACE", "DEBUG").state();

    assert_probe(&state, "/log/promote/not-info", "false").await;
}

#[tokio::test]
async fn test_promote_error_false_when_logging_off() {
    let state = ConfigFixture::new().root("OFF", "INFO").state();

    assert_probe(&state, "/log/promote/error", "false").await;
}

#[tokio::test]
async fn test_repeated_calls_are_stable() {
    let state = ConfigFixture::new()
        .category(PROMOTE, Some("ERROR"), None)
        .state();

    for _ in 0..3 {
        assert_probe(&state, "/log/promote/not-info", "true").await;
        assert_probe(&state, "/log/promote/error", "true").await;
    }
    assert_eq!(
        state
            .logging()
            .witness()
            .count(tracing::Level::ERROR, PROMOTE, "error message")
            .unwrap(),
        3
    );
}

#[tokio::test]
async fn test_bundled_config_passes_every_probe() {
    let state = AppState::new(LoggingDispatch::for_tests(ProbeConfig::bundled().logging));

    for path in [
        "/log/promote/not-info",
        "/log/promote/error",
        "/log/above/not-info",
        "/log/above/warn",
        "/log/below/trace",
        "/log/below/child/trace",
        "/log/bydefault/info",
        "/log/bydefault/not-trace",
    ] {
        assert_probe(&state, path, "true").await;
    }
}

#[tokio::test]
async fn test_child_category_can_override_parent() {
    let state = ConfigFixture::new()
        .category("minlevel_web::probe::below", Some("TRACE"), Some("TRACE"))
        .category("minlevel_web::probe::below::child", None, Some("INFO"))
        .state();

    assert_probe(&state, "/log/below/trace", "true").await;
    assert_probe(&state, "/log/below/child/trace", "false").await;
}

#[tokio::test]
async fn test_above_without_category_config() {
    let state = ConfigFixture::new().root("DEBUG", "INFO").state();

    assert_probe(&state, "/log/above/not-info", "false").await;
    assert_probe(&state, "/log/above/warn", "true").await;
}
