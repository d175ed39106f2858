// ./src/config.rs

use serde::{Deserialize, Serialize};

/// Endpoint the page fetches from.
pub const HELLO_PATH: &str = "/api/hello";
/// Id of the button that triggers a fetch.
pub const TRIGGER_ID: &str = "fetchBtn";
/// Id of the region the result is written into.
pub const TARGET_ID: &str = "result";

// ════════════════════════════════════════════════════════════
// 1. Handler
// ════════════════════════════════════════════════════════════

/// How the handler treats the HTTP status of a response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Any response whose body parses is a success, whatever its status.
    #[default]
    Ignore,
    /// Non-2xx responses fail with `FetchError::Status` before parsing.
    RequireSuccess,
}

impl StatusPolicy {
    pub fn accepts(self, status: u16) -> bool {
        match self {
            StatusPolicy::Ignore => true,
            StatusPolicy::RequireSuccess => (200..300).contains(&status),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub endpoint: String,
    pub trigger_id: String,
    pub target_id: String,
    pub status_policy: StatusPolicy,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        Self {
            endpoint: HELLO_PATH.to_owned(),
            trigger_id: TRIGGER_ID.to_owned(),
            target_id: TARGET_ID.to_owned(),
            status_policy: StatusPolicy::default(),
        }
    }
}

// ════════════════════════════════════════════════════════════
// 2. Companion server
// ════════════════════════════════════════════════════════════

#[cfg(feature = "server")]
pub use server_config::ServerConfig;

#[cfg(feature = "server")]
mod server_config {
    use crate::error::ConfigError;
    use std::net::SocketAddr;
    use std::path::PathBuf;

    pub const ADDR_VAR: &str = "CLICKFETCH_ADDR";
    pub const PKG_DIR_VAR: &str = "CLICKFETCH_PKG_DIR";
    pub const MESSAGE_VAR: &str = "CLICKFETCH_MESSAGE";

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ServerConfig {
        pub addr: SocketAddr,
        /// Directory holding the wasm-bindgen output served under `/pkg`.
        pub pkg_dir: PathBuf,
        /// Greeting returned by `/api/hello`.
        pub message: String,
    }

    impl Default for ServerConfig {
        fn default() -> Self {
            Self {
                addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
                pkg_dir: PathBuf::from("pkg"),
                message: "Hello, World!".to_owned(),
            }
        }
    }

    impl ServerConfig {
        pub fn from_env() -> Result<Self, ConfigError> {
            Self::from_lookup(|var| std::env::var(var).ok())
        }

        /// Builds a config from any variable source; unset variables keep
        /// their defaults.
        pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
        where
            F: Fn(&str) -> Option<String>,
        {
            let mut config = Self::default();

            if let Some(value) = lookup(ADDR_VAR) {
                config.addr = value.parse().map_err(|_| ConfigError::InvalidAddr {
                    var: ADDR_VAR,
                    value: value.clone(),
                })?;
            }
            if let Some(value) = lookup(PKG_DIR_VAR) {
                config.pkg_dir = PathBuf::from(value);
            }
            if let Some(value) = lookup(MESSAGE_VAR) {
                config.message = value;
            }

            Ok(config)
        }
    }
}
