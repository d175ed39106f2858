// ./src/assets.rs

use crate::config::ServerConfig;
use crate::response::{file, html, ResponseExt};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use headers::{ETag, HeaderMapExt, IfNoneMatch};
use std::sync::Arc;

/// The page hosting the button and the result region, embedded at compile time.
pub const INDEX_HTML: &str = include_str!("../public/index.html");

/// Strong validator for [`INDEX_HTML`], derived from its contents at build time.
pub const PAGE_ETAG: &str = concat!("\"", env!("CLICKFETCH_PAGE_HASH"), "\"");

/// URL prefix the wasm-bindgen output is served under.
pub const PKG_PREFIX: &str = "/pkg";

/// Serves the embedded page, answering 304 when the client already has it.
pub async fn serve_index(headers: HeaderMap) -> Response {
    if let (Some(if_none_match), Ok(etag)) = (
        headers.typed_get::<IfNoneMatch>(),
        PAGE_ETAG.parse::<ETag>(),
    ) {
        if !if_none_match.precondition_passes(&etag) {
            return StatusCode::NOT_MODIFIED.into_response();
        }
    }

    html(INDEX_HTML)
        .with_header("etag", PAGE_ETAG)
        .with_header("cache-control", "no-cache")
        .into_response()
}

/// Serves a file from the configured pkg directory.
pub async fn serve_pkg(
    State(config): State<Arc<ServerConfig>>,
    Path(path): Path<String>,
) -> Response {
    if !is_safe_relative(&path) {
        return not_found();
    }

    let on_disk = config.pkg_dir.join(&path);
    match tokio::fs::read(&on_disk).await {
        Ok(bytes) => file(bytes, content_type_for(&path))
            .with_header("cache-control", "no-cache")
            .into_response(),
        Err(err) => {
            tracing::debug!(path = %on_disk.display(), error = %err, "pkg asset not served");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "not found").into_response()
}

fn is_safe_relative(path: &str) -> bool {
    !path.is_empty()
        && !path.starts_with('/')
        && !path.contains('\\')
        && path.split('/').all(|seg| !seg.is_empty() && seg != "." && seg != "..")
}

pub fn content_type_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => "application/javascript; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("ts") => "text/plain; charset=utf-8",
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        _ => "application/octet-stream",
    }
}
