// ./src/error.rs

use thiserror::Error;

/// Prefix written in front of every failure description shown to the user.
pub const ERROR_PREFIX: &str = "Error fetching data: ";

/// Everything that can go wrong between a click and a rendered message.
///
/// The user only ever sees one kind of failure; the variants exist so callers
/// and logs can tell them apart. `Display` yields the bare description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request never produced a response (refused, DNS, CORS, aborted).
    #[error("{0}")]
    Network(String),
    /// The body could not be parsed as JSON.
    #[error("{0}")]
    Parse(String),
    /// Non-2xx response, only raised under `StatusPolicy::RequireSuccess`.
    #[error("HTTP {status}")]
    Status { status: u16 },
}

impl FetchError {
    pub fn network(description: impl Into<String>) -> Self {
        Self::Network(description.into())
    }

    pub fn parse(description: impl Into<String>) -> Self {
        Self::Parse(description.into())
    }

    /// The full text rendered into the display target.
    pub fn display_text(&self) -> String {
        format!("{ERROR_PREFIX}{self}")
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Invalid companion-server configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a socket address")]
    InvalidAddr { var: &'static str, value: String },
}
