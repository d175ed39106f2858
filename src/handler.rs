// ./src/handler.rs

use crate::config::HandlerConfig;
use crate::display::DisplayTarget;
use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::payload::ResponsePayload;

/// What an activation ended up writing into the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Message(String),
    Error(String),
}

impl Rendered {
    pub fn text(&self) -> &str {
        match self {
            Rendered::Message(text) | Rendered::Error(text) => text,
        }
    }
}

/// Fetches the greeting on every activation and writes it into the target.
///
/// Activations are independent: nothing guards against overlap, nothing is
/// cancelled, and whichever activation resolves last owns the final text.
pub struct ClickToFetchHandler<F, T> {
    fetcher: F,
    target: T,
    config: HandlerConfig,
}

impl<F, T> ClickToFetchHandler<F, T>
where
    F: Fetcher,
    T: DisplayTarget,
{
    pub fn new(fetcher: F, target: T, config: HandlerConfig) -> Self {
        Self {
            fetcher,
            target,
            config,
        }
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Runs one click: fetch, parse, render. Never fails; the target is
    /// always visible afterwards.
    pub async fn activate(&self) -> Rendered {
        tracing::debug!(endpoint = %self.config.endpoint, "activation started");

        let rendered = match self.fetch_message().await {
            Ok(payload) => Rendered::Message(payload.display_text()),
            Err(err) => {
                tracing::warn!(endpoint = %self.config.endpoint, error = %err, "fetch failed");
                Rendered::Error(err.display_text())
            }
        };

        self.render(&rendered);
        rendered
    }

    /// Fetch and parse only; the target is left untouched.
    pub async fn fetch_message(&self) -> Result<ResponsePayload, FetchError> {
        let response = self.fetcher.get(&self.config.endpoint).await?;

        if !self.config.status_policy.accepts(response.status) {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        ResponsePayload::parse(&response.body)
    }

    fn render(&self, rendered: &Rendered) {
        self.target.set_text(rendered.text());
        self.target.show();
    }
}
