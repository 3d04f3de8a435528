//! End-to-end tests for the save/read API against a local storage backend.

use axum_test::TestServer;
use notely_api::setup::routes::setup_routes;
use notely_api::state::AppState;
use notely_core::config::{BaseConfig, Config};
use notely_storage::LocalStorage;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

fn test_config() -> Config {
    Config {
        base: BaseConfig {
            server_port: 0,
            cors_origins: vec!["*".to_string()],
            environment: "test".to_string(),
        },
        storage_backend: None,
        local_storage_path: String::new(),
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_region: None,
        aws_access_key_id: None,
        aws_secret_access_key: None,
    }
}

async fn test_server() -> (TestServer, TempDir) {
    let dir = TempDir::new().expect("create temp dir");
    let storage = LocalStorage::new(dir.path()).await.expect("create storage");
    let config = test_config();
    let state = Arc::new(AppState {
        config: config.clone(),
        storage: Arc::new(storage),
    });
    let router = setup_routes(&config, state).expect("build router");
    (TestServer::new(router).expect("start test server"), dir)
}

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

#[tokio::test]
async fn test_save_and_read_round_trip() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "math", "content": "two plus two is four"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["subject"], "math");
    assert_eq!(body["word_count"], 5);
    assert!(body["message"].as_str().unwrap().contains("saved"));

    let response = server.get("/api/read/math").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["subject"], "math");
    assert_eq!(body["content"], "two plus two is four");
    assert_eq!(body["word_count"], 5);
}

#[tokio::test]
async fn test_save_trims_inputs() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "  notes ", "content": "  hello world \n"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["subject"], "notes");
    assert_eq!(body["word_count"], 2);

    let response = server.get("/api/read/notes").await;
    let body: Value = response.json();
    assert_eq!(body["content"], "hello world");
}

#[tokio::test]
async fn test_empty_subject_rejected() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "", "content": "hello"}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["detail"].as_str().unwrap().contains("Subject"));
}

#[tokio::test]
async fn test_blank_content_rejected() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "sub", "content": "   "}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("Content"));
}

#[tokio::test]
async fn test_word_cap_boundary() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "exact", "content": words(150)}))
        .await;
    response.assert_status_ok();

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "over", "content": words(151)}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("151"));
    assert!(detail.contains("150"));
}

#[tokio::test]
async fn test_irregular_whitespace_word_count() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "spacing", "content": "a  b   c"}))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["word_count"], 3);
}

#[tokio::test]
async fn test_overwrite_returns_latest_content() {
    let (server, _dir) = test_server().await;

    server
        .post("/api/save")
        .json(&json!({"subject": "x", "content": "first version"}))
        .await
        .assert_status_ok();
    server
        .post("/api/save")
        .json(&json!({"subject": "x", "content": "second version"}))
        .await
        .assert_status_ok();

    let response = server.get("/api/read/x").await;
    let body: Value = response.json();
    assert_eq!(body["content"], "second version");
}

#[tokio::test]
async fn test_read_missing_subject() {
    let (server, _dir) = test_server().await;

    let response = server.get("/api/read/does-not-exist").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["code"], "NOT_FOUND");
    assert!(body["detail"].as_str().unwrap().contains("does-not-exist"));
}

#[tokio::test]
async fn test_read_blank_subject() {
    let (server, _dir) = test_server().await;

    let response = server.get("/api/read/%20%20").await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("Subject"));
}

#[tokio::test]
async fn test_traversal_subject_rejected() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "../escape", "content": "boom"}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let (server, _dir) = test_server().await;

    let response = server
        .post("/api/save")
        .json(&json!({"subject": "x"}))
        .await;
    response.assert_status_bad_request();

    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
    assert!(body["detail"].as_str().unwrap().contains("Invalid request body"));
}

#[tokio::test]
async fn test_liveness_probe() {
    let (server, _dir) = test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "notely-api");
}

#[tokio::test]
async fn test_health_check() {
    let (server, _dir) = test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "healthy");
}
