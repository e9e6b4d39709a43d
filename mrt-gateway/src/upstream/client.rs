//! Upstream HTTP client.
//!
//! Fetches the operator's station document with a single GET. No retries:
//! one failed attempt fails the request that triggered it.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use super::error::UpstreamError;

/// Default upstream URL (Jakarta MRT station feed).
pub const DEFAULT_UPSTREAM_URL: &str = "https://www.jakartamrt.co.id/id/val/stasiuns";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Source of the raw upstream document.
///
/// Implemented by [`UpstreamClient`] for live traffic; tests can supply
/// canned bodies instead.
pub trait TransitSource: Send + Sync {
    /// Fetch the full upstream body, unparsed.
    fn fetch(&self) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}

/// Configuration for the upstream client.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// URL of the station document
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl UpstreamConfig {
    /// Create a config for the given URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::new(DEFAULT_UPSTREAM_URL)
    }
}

/// Client for the upstream station document.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    url: String,
}

impl UpstreamClient {
    /// Create a new upstream client.
    pub fn new(config: UpstreamConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// The URL this client fetches.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the upstream document.
    ///
    /// Anything other than `200 OK` is an error, including other 2xx codes.
    pub async fn fetch(&self) -> Result<String, UpstreamError> {
        debug!(url = %self.url, "fetching upstream");

        let response = self.http.get(&self.url).send().await?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            return Err(UpstreamError::Status { status });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "upstream fetched");

        Ok(body)
    }
}

impl TransitSource for UpstreamClient {
    fn fetch(&self) -> impl Future<Output = Result<String, UpstreamError>> + Send {
        UpstreamClient::fetch(self)
    }
}
