//! HTTP client wrapper for upstream provider calls
//!
//! One outbound GET per invocation, no retry, no timeout beyond the
//! transport default. Failures are passed through to the handler unchanged:
//! transport errors, non-2xx statuses (with the raw body attached) and
//! undecodable bodies all surface as [`ApiError`] values.

use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::Result;
use crate::error::ApiError;

/// Shared client for all upstream providers
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
}

impl UpstreamClient {
    /// Create a new client with the application user agent
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("CityScout/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// GET a URL and decode its JSON body
    #[instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.execute(self.client.get(url)).await
    }

    /// GET a URL with a bearer token and decode its JSON body
    #[instrument(skip(self, token))]
    pub async fn get_json_with_bearer<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
    ) -> Result<T> {
        self.execute(self.client.get(url).bearer_auth(token)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "upstream returned an error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
