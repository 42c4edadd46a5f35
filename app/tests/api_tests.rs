mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use octofit::config::config::Config;
use serde_json::Value;
use tower::util::ServiceExt;

use common::create_test_app;

async fn get_json(app: axum::Router, uri: &str, headers: &[(&str, &str)]) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    for (name, value) in headers {
        request = request.header(*name, *value);
    }

    let response = app
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

#[tokio::test]
async fn api_root_lists_all_resource_urls() {
    let app = create_test_app(Config::test_default());

    let (status, json) = get_json(app, "/api/", &[("host", "example.com")]).await;

    assert_eq!(status, StatusCode::OK);
    let map = json.as_object().unwrap();
    assert_eq!(map.len(), 5);
    for resource in ["users", "teams", "activities", "workouts", "leaderboard"] {
        let url = map[resource].as_str().unwrap();
        assert!(
            url.ends_with(&format!("/api/{}/", resource)),
            "unexpected url for {}: {}",
            resource,
            url
        );
    }
}

#[tokio::test]
async fn api_root_falls_back_to_request_host() {
    let app = create_test_app(Config::test_default());

    let (status, json) = get_json(app, "/api/", &[("host", "example.com")]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["teams"], "http://example.com/api/teams/");
}

#[tokio::test]
async fn api_root_prefers_codespace_hostname() {
    let mut config = Config::test_default();
    config.codespace_name = Some("foo".to_string());
    let app = create_test_app(config);

    let (status, json) = get_json(app, "/api/", &[("host", "example.com")]).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["users"], "https://foo-8000.app.github.dev/api/users/");
}

#[tokio::test]
async fn api_root_honors_forwarded_proto() {
    let app = create_test_app(Config::test_default());

    let (status, json) = get_json(
        app,
        "/api/",
        &[("host", "example.com"), ("x-forwarded-proto", "https")],
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["activities"], "https://example.com/api/activities/");
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let app = create_test_app(Config::test_default());

    let (status, json) = get_json(app, "/nope", &[("host", "example.com")]).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "error");
}
