//! HTTP transport for image byte fetches

use crate::error::{LoadError, Result};
use crate::types::LoaderConfig;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Byte-fetching abstraction the loader drives.
///
/// Implementations perform a single attempt per call; the loader never
/// retries a failed fetch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the raw bytes behind `url`
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>>;
}

/// reqwest-backed transport with a connect timeout and a total deadline
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given connect timeout and total
    /// per-request deadline
    pub fn new(connect_timeout: Duration, request_deadline: Duration) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_deadline)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(
            LoaderConfig::DEFAULT_CONNECT_TIMEOUT,
            LoaderConfig::DEFAULT_REQUEST_DEADLINE,
        )
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        debug!(url = %url, "Fetching image bytes");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = %status, "Image fetch returned error status");
            return Err(LoadError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        debug!(url = %url, size = bytes.len(), "Fetched image bytes");

        Ok(bytes.to_vec())
    }
}
