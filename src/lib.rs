// ./src/lib.rs

pub mod config;
pub mod display;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod payload;

#[cfg(feature = "server")]
pub mod assets;
#[cfg(feature = "server")]
pub mod response;
#[cfg(feature = "server")]
pub mod server;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export the core API so callers can just `use clickfetch::*`
pub use config::{HandlerConfig, StatusPolicy, HELLO_PATH, TARGET_ID, TRIGGER_ID};
pub use display::{DisplayTarget, MemoryTarget};
pub use error::{FetchError, ERROR_PREFIX};
pub use fetch::{Fetcher, RawResponse};
pub use handler::{ClickToFetchHandler, Rendered};
pub use payload::ResponsePayload;

#[cfg(all(feature = "native-client", not(target_arch = "wasm32")))]
pub use fetch::ReqwestFetcher;
#[cfg(feature = "server")]
pub use config::ServerConfig;
#[cfg(feature = "server")]
pub use server::{router, serve};
