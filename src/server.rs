// ./src/server.rs

use crate::assets;
use crate::config::{ServerConfig, HELLO_PATH};
use crate::payload::ResponsePayload;
use crate::response::{json, ResponseExt};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

/// Routes for the page, its endpoint and the wasm bundle.
pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/", get(assets::serve_index))
        .route(HELLO_PATH, get(hello))
        .route(&format!("{}/*path", assets::PKG_PREFIX), get(assets::serve_pkg))
        .with_state(Arc::new(config))
}

async fn hello(State(config): State<Arc<ServerConfig>>) -> Response {
    json(ResponsePayload::new(config.message.clone()))
        .no_cache()
        .into_response()
}

/// Binds `config.addr` and serves until the process stops.
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        pkg_dir = %config.pkg_dir.display(),
        "listening"
    );
    axum::serve(listener, router(config)).await
}
