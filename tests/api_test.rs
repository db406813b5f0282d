//! End-to-end tests for the HTTP surface.

use demo_api::AppConfig;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn ping_returns_plain_text_pong() {
    let base = common::spawn_app().await;

    let response = reqwest::get(format!("{base}/ping")).await.unwrap();
    assert_eq!(response.status(), 200);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(response.text().await.unwrap(), "pong");
}

#[tokio::test]
async fn version_reports_configured_values() {
    let base = common::spawn_app_with(AppConfig {
        environment: "test".to_string(),
        version: "9.9.9".to_string(),
        ..AppConfig::default()
    })
    .await;

    let body: Value = reqwest::get(format!("{base}/version"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("demo-api"));
    assert_eq!(body["data"]["version"], json!("9.9.9"));
    assert_eq!(body["data"]["environment"], json!("test"));
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn echo_reflects_json_bodies_verbatim() {
    let base = common::spawn_app().await;
    let payload = json!({
        "nested": {"list": [1, 2, 3], "flag": true},
        "text": "hello",
        "number": 4.5,
    });

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/echo"))
        .header("x-echo-test", "first")
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["echo"], payload);
    assert_eq!(body["data"]["method"], json!("POST"));
    assert_eq!(body["data"]["headers"]["x-echo-test"], json!("first"));
}

#[tokio::test]
async fn echo_rejects_invalid_json_with_error_envelope() {
    let base = common::spawn_app().await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{base}/echo"))
        .body("not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], json!(true));
    assert_eq!(body["message"], json!("Invalid JSON"));
    assert_eq!(body["statusCode"], json!(400));
    assert!(!body["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn index_lists_every_registered_endpoint() {
    let base = common::spawn_app().await;

    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["success"], json!(true));
    let endpoints = body["data"]["endpoints"].as_array().unwrap();
    let paths: Vec<&str> = endpoints
        .iter()
        .map(|e| e["path"].as_str().unwrap())
        .collect();
    for path in [
        "/", "/ping", "/healthz", "/info", "/version", "/echo", "/openapi.json",
        "/openapi.yaml", "/metrics",
    ] {
        assert!(paths.contains(&path), "index is missing {path}");
    }
}

#[tokio::test]
async fn healthz_reports_healthy_with_memory_statistics() {
    let base = common::spawn_app().await;

    let body: Value = reqwest::get(format!("{base}/healthz"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let data = &body["data"];
    assert_eq!(data["status"], json!("healthy"));
    assert!(data["uptime"].as_f64().unwrap() >= 0.0);
    // Live introspection is non-deterministic; assert structure and types,
    // not exact values.
    assert!(data["memory"]["rss"].is_u64());
    assert!(data["memory"]["total"].is_u64());
    assert!(data["memory"]["percent"].is_number());
    assert!(!data["timestamp"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn healthz_survives_concurrent_load_with_monotonic_uptime() {
    let base = common::spawn_app().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for _ in 0..100 {
        let client = client.clone();
        let url = format!("{base}/healthz");
        tasks.push(tokio::spawn(async move {
            let response = client.get(&url).send().await.unwrap();
            assert_eq!(response.status(), 200);
            let body: Value = response.json().await.unwrap();
            assert_eq!(body["data"]["status"], json!("healthy"));
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let mut previous = 0.0;
    for _ in 0..3 {
        let body: Value = client
            .get(format!("{base}/healthz"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let uptime = body["data"]["uptime"].as_f64().unwrap();
        assert!(uptime >= previous, "uptime went backwards");
        previous = uptime;
    }
}

#[tokio::test]
async fn info_snapshots_application_system_and_environment() {
    let base = common::spawn_app().await;

    let body: Value = reqwest::get(format!("{base}/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let data = &body["data"];
    assert_eq!(data["application"]["name"], json!("demo-api"));
    assert_eq!(data["environment"]["app_env"], json!("test"));
    assert!(data["system"]["platform"].is_string());
    assert!(data["system"]["architecture"].is_string());
    assert!(data["system"]["cpu"]["count"].is_u64());
    assert!(data["system"]["cpu"]["percent"].is_number());
    assert!(data["system"]["memory"]["rss"].is_u64());
}

#[tokio::test]
async fn repeated_reads_never_mutate_shared_state() {
    let base = common::spawn_app().await;

    let first: Value = reqwest::get(format!("{base}/version"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = reqwest::get(format!("{base}/version"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first["data"], second["data"]);

    let info_first: Value = reqwest::get(format!("{base}/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let info_second: Value = reqwest::get(format!("{base}/info"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        info_first["data"]["application"],
        info_second["data"]["application"]
    );
}

#[tokio::test]
async fn openapi_documents_are_served() {
    let base = common::spawn_app().await;

    let json_doc: Value = reqwest::get(format!("{base}/openapi.json"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json_doc["openapi"], json!("3.0.3"));

    let yaml_response = reqwest::get(format!("{base}/openapi.yaml")).await.unwrap();
    assert_eq!(yaml_response.status(), 200);
    let content_type = yaml_response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/x-yaml"));
    assert!(yaml_response.text().await.unwrap().contains("openapi: 3.0.3"));
}
