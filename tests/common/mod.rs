//! Shared utilities for integration testing.

use demo_api::{AppConfig, HttpServer};
use tokio::net::TcpListener;

/// Start the service on an ephemeral port with the test environment
/// (request logging suppressed). Returns the base URL.
pub async fn spawn_app() -> String {
    spawn_app_with(AppConfig {
        environment: "test".to_string(),
        ..AppConfig::default()
    })
    .await
}

/// Start the service with explicit configuration.
pub async fn spawn_app_with(config: AppConfig) -> String {
    let server = HttpServer::new(config).expect("server construction");
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{addr}")
}
