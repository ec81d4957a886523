#[allow(dead_code)]
mod common;

use bouncer_server::config::ServerConfig;
use common::{AssetServer, web_root};

#[tokio::test]
async fn root_serves_index_document() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.root_url()).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    let body = resp.text().await.unwrap();
    assert!(body.contains("screensaver-container"));
    assert!(body.contains("bouncing-image"));
}

#[tokio::test]
async fn static_files_served_from_web_root() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/style.css")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/css"), "got {content_type}");
    assert!(resp.text().await.unwrap().contains(".color-trail"));
}

#[tokio::test]
async fn index_also_reachable_by_name() {
    let server = AssetServer::over_web_root().await;
    let by_root = reqwest::get(server.root_url()).await.unwrap().text().await.unwrap();
    let by_name = reqwest::get(server.url("/index.html"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(by_root, by_name);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/missing/asset.js")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn path_traversal_is_rejected() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/..%2f..%2fCargo.toml")).await.unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn responses_carry_cache_control() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/style.css")).await.unwrap();
    assert_eq!(resp.headers()["cache-control"], "no-cache");
}

#[tokio::test]
async fn configured_cache_control_is_used() {
    let server = AssetServer::spawn(ServerConfig {
        web_root: web_root(),
        cache_control: "max-age=300".to_string(),
        compression: false,
        ..ServerConfig::default()
    })
    .await;
    let resp = reqwest::get(server.root_url()).await.unwrap();
    assert_eq!(resp.headers()["cache-control"], "max-age=300");
}

#[tokio::test]
async fn health_reports_version() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn ready_when_index_exists() {
    let server = AssetServer::over_web_root().await;
    let resp = reqwest::get(server.url("/ready")).await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ready");
}

#[tokio::test]
async fn missing_web_root_is_not_ready_and_404s() {
    let server = AssetServer::without_assets().await;

    let ready = reqwest::get(server.url("/ready")).await.unwrap();
    assert_eq!(ready.status(), 503);

    let root = reqwest::get(server.root_url()).await.unwrap();
    assert_eq!(root.status(), 404);
}
