// ./src/fetch.rs

use crate::error::FetchError;
use async_trait::async_trait;

/// Status and body of a completed response. The body is not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// Issues the handler's outbound `GET`.
///
/// Futures are `?Send`: in the browser they run on the page's event loop and
/// hold non-`Send` JS handles.
#[async_trait(?Send)]
pub trait Fetcher {
    /// Fetches `endpoint` with the default method, no body and no extra
    /// headers. Only transport failures are errors here.
    async fn get(&self, endpoint: &str) -> Result<RawResponse, FetchError>;
}

#[cfg(all(feature = "native-client", not(target_arch = "wasm32")))]
pub use native::ReqwestFetcher;

#[cfg(all(feature = "native-client", not(target_arch = "wasm32")))]
mod native {
    use super::{Fetcher, RawResponse};
    use crate::error::FetchError;
    use async_trait::async_trait;

    /// `reqwest`-backed fetcher that resolves endpoints against a base URL,
    /// the way a page resolves them against its origin.
    #[derive(Debug, Clone)]
    pub struct ReqwestFetcher {
        client: reqwest::Client,
        base_url: String,
    }

    impl ReqwestFetcher {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self::with_client(reqwest::Client::new(), base_url)
        }

        pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
            let base_url = base_url.into().trim_end_matches('/').to_owned();
            Self { client, base_url }
        }

        pub fn url_for(&self, endpoint: &str) -> String {
            format!("{}{}", self.base_url, endpoint)
        }
    }

    #[async_trait(?Send)]
    impl Fetcher for ReqwestFetcher {
        async fn get(&self, endpoint: &str) -> Result<RawResponse, FetchError> {
            let response = self
                .client
                .get(self.url_for(endpoint))
                .send()
                .await
                .map_err(|err| FetchError::network(err.to_string()))?;

            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| FetchError::network(err.to_string()))?;

            Ok(RawResponse { status, body })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::ReqwestFetcher;

        #[test]
        fn endpoint_is_joined_to_base_without_double_slash() {
            let fetcher = ReqwestFetcher::new("http://127.0.0.1:3000/");
            assert_eq!(
                fetcher.url_for("/api/hello"),
                "http://127.0.0.1:3000/api/hello"
            );
        }
    }
}
