// tests/server_routes.rs
//
// Router-level checks for the page, the greeting endpoint and the pkg assets.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use clickfetch::{router, ResponsePayload, ServerConfig};
use std::path::PathBuf;
use tower::ServiceExt;

// ── Helpers ─────────────────────────────────────────────────

async fn get(config: ServerConfig, uri: &str) -> Response {
    router(config)
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get_header(response: &Response, name: header::HeaderName) -> Option<String> {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
}

/// A throwaway pkg directory unique to the calling test.
fn pkg_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("clickfetch-{name}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ════════════════════════════════════════════════════════════
// /api/hello
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn hello_returns_default_greeting() {
    let response = get(ServerConfig::default(), "/api/hello").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert_eq!(body, r#"{"message":"Hello, World!"}"#);
}

#[tokio::test]
async fn hello_is_json_and_never_cached() {
    let response = get(ServerConfig::default(), "/api/hello").await;

    let content_type = get_header(&response, header::CONTENT_TYPE).unwrap();
    assert!(content_type.contains("application/json"), "got: {content_type}");
    assert_eq!(
        get_header(&response, header::CACHE_CONTROL).as_deref(),
        Some("no-store")
    );
}

#[tokio::test]
async fn hello_uses_configured_message() {
    let config = ServerConfig {
        message: "Bonjour".into(),
        ..ServerConfig::default()
    };
    let body = body_string(get(config, "/api/hello").await).await;
    let payload = ResponsePayload::parse(&body).unwrap();
    assert_eq!(payload.display_text(), "Bonjour");
}

// ════════════════════════════════════════════════════════════
// Page
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn index_serves_page_with_hidden_result() {
    let response = get(ServerConfig::default(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(get_header(&response, header::ETAG).is_some());

    let body = body_string(response).await;
    assert!(body.contains(r#"<button id="fetchBtn""#));
    assert!(body.contains(r#"<div id="result" style="display: none"></div>"#));
}

#[tokio::test]
async fn unknown_route_is_404() {
    let response = get(ServerConfig::default(), "/api/goodbye").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ════════════════════════════════════════════════════════════
// /pkg
// ════════════════════════════════════════════════════════════

#[tokio::test]
async fn pkg_serves_files_with_content_type() {
    let dir = pkg_dir("serve");
    std::fs::write(dir.join("clickfetch.js"), "export default function init() {}").unwrap();

    let config = ServerConfig {
        pkg_dir: dir,
        ..ServerConfig::default()
    };
    let response = get(config, "/pkg/clickfetch.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        get_header(&response, header::CONTENT_TYPE).as_deref(),
        Some("application/javascript; charset=utf-8")
    );
    assert_eq!(
        get_header(&response, header::CACHE_CONTROL).as_deref(),
        Some("no-cache")
    );
    assert_eq!(
        body_string(response).await,
        "export default function init() {}"
    );
}

#[tokio::test]
async fn pkg_missing_file_is_404() {
    let config = ServerConfig {
        pkg_dir: pkg_dir("missing"),
        ..ServerConfig::default()
    };
    let response = get(config, "/pkg/clickfetch_bg.wasm").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pkg_rejects_parent_segments() {
    let dir = pkg_dir("traversal");
    let config = ServerConfig {
        pkg_dir: dir.join("pkg"),
        ..ServerConfig::default()
    };
    std::fs::create_dir_all(&config.pkg_dir).unwrap();
    std::fs::write(dir.join("secret.txt"), "nope").unwrap();

    let response = get(config, "/pkg/../secret.txt").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
