use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use figment::{
    providers::{Format, Yaml},
    Figment,
};
use futures::future::join_all;
use promgreet::config::{Config, ConfigV1};
use promgreet::metrics::Metrics;
use promgreet::routes::create_router;
use promgreet::state::AppState;
use tower::ServiceExt;

const TEST_CONFIG: &str = r#"
version: "1.0.0"
bind_address: 127.0.0.1:0
metrics:
  service_name: promgreet-test
  path: /metrics
logging:
  level: "debug"
  format: "json"
"#;

fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

fn build_app(config: ConfigV1) -> (Router, Arc<ConfigV1>) {
    let config = Arc::new(config);
    let metrics = Metrics::new(&config.metrics.service_name);

    let state = AppState {
        config: config.clone(),
        metrics,
    };

    (create_router(state), config)
}

fn request(path: &str, method: Method) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("body was not valid UTF-8")
}

#[tokio::test]
async fn get_root_returns_hello_world() {
    let (app, _config) = build_app(load_test_config());

    let response = app.oneshot(request("/", Method::GET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello World");
}

#[tokio::test]
async fn post_some2_returns_welcome() {
    let (app, _config) = build_app(load_test_config());

    let response = app.oneshot(request("/some2", Method::POST)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Welcome!");
}

#[tokio::test]
async fn metrics_endpoint_returns_exposition_text() {
    let (app, _config) = build_app(load_test_config());

    // Touch an instrumented route first so the families carry samples.
    let response = app.clone().oneshot(request("/", Method::GET)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(request("/metrics", Method::GET)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("missing content-type")
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_string(response).await;
    assert!(!body.is_empty());
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let (app, _config) = build_app(load_test_config());

    let response = app.oneshot(request("/nope", Method::GET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wrong_method_on_known_path_is_rejected() {
    let (app, _config) = build_app(load_test_config());

    let response = app.oneshot(request("/some2", Method::GET)).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn concurrent_requests_all_succeed() {
    let (app, _config) = build_app(load_test_config());

    let calls = (0..32).map(|_| {
        let app = app.clone();
        async move {
            let response = app.oneshot(request("/", Method::GET)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
            body_string(response).await
        }
    });

    for body in join_all(calls).await {
        assert_eq!(body, "Hello World");
    }
}

#[tokio::test]
async fn metrics_reflect_observed_requests() {
    let (app, _config) = build_app(load_test_config());

    for _ in 0..3 {
        let response = app.clone().oneshot(request("/", Method::GET)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
    let response = app
        .clone()
        .oneshot(request("/some2", Method::POST))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(request("/metrics", Method::GET)).await.unwrap();
    let body = body_string(response).await;

    let root_line = body
        .lines()
        .find(|l| {
            l.starts_with("http_requests_total")
                && l.contains(r#"method="GET""#)
                && l.contains(r#"path="/""#)
        })
        .expect("no counter sample for GET /");
    assert!(root_line.ends_with(" 3"), "unexpected line: {root_line}");
    assert!(root_line.contains(r#"service="promgreet-test""#));
    assert!(root_line.contains(r#"status_code="200""#));

    assert!(body.lines().any(|l| {
        l.starts_with("http_requests_total")
            && l.contains(r#"method="POST""#)
            && l.contains(r#"path="/some2""#)
            && l.contains(r#"status_code="200""#)
    }));
}

#[tokio::test]
async fn exposition_endpoint_does_not_instrument_itself() {
    let (app, _config) = build_app(load_test_config());

    // Scrape twice; a third scrape would show samples if the endpoint
    // observed its own traffic.
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(request("/metrics", Method::GET))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(request("/metrics", Method::GET)).await.unwrap();
    let body = body_string(response).await;

    assert!(!body
        .lines()
        .any(|l| l.starts_with("http_requests_total") && l.contains(r#"path="/metrics""#)));
}
