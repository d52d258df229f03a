use axum::{body::Body, http::Request, http::StatusCode};
use serde_json::json;

mod helpers;
use helpers::{json_request, TestApp};

#[tokio::test]
async fn test_reads_do_not_need_key() {
    let app = TestApp::with_api_key(Some("s3cret")).await;

    let (status, _) = app.get("/usage").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_writes_without_key_are_rejected() {
    let app = TestApp::with_api_key(Some("s3cret")).await;

    let (status, _) = app
        .post_json("/access/check", json!({ "url": "https://x.com/" }))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_writes_with_wrong_key_are_rejected() {
    let app = TestApp::with_api_key(Some("s3cret")).await;
    let mut request = json_request("PUT", "/sites/x.com", json!({}));
    request
        .headers_mut()
        .insert("X-Api-Key", "nope".parse().unwrap());

    let (status, _) = app.send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_writes_with_key_pass() {
    let app = TestApp::with_api_key(Some("s3cret")).await;
    let request = Request::builder()
        .method("POST")
        .uri("/access/check")
        .header("content-type", "application/json")
        .header("X-Api-Key", "s3cret")
        .body(Body::from(json!({ "url": "https://x.com/" }).to_string()))
        .unwrap();

    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allowed"], json!(true));
}
