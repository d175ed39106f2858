// ./src/main.rs
//
// Serves the click-to-fetch page, its `/api/hello` endpoint and the wasm bundle.
//
// Build the bundle:  wasm-pack build --target web --no-default-features
// Run:               cargo run --bin clickfetch-server
// Test:              curl http://127.0.0.1:3000/api/hello

use clickfetch::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("clickfetch=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    clickfetch::serve(config).await?;
    Ok(())
}
