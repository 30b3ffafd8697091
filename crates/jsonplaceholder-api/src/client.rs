//! JSONPlaceholder API HTTP client

use crate::error::{PhotoApiError, Result};
use crate::types::Photo;
use std::time::Duration;
use tracing::debug;

/// Client for the JSONPlaceholder photos endpoint
pub struct PhotoApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl PhotoApiClient {
    /// Base URL for the JSONPlaceholder API
    pub const BASE_URL: &'static str = "https://jsonplaceholder.typicode.com";
    /// Photo count requested by the browsing client
    pub const DEFAULT_PHOTO_LIMIT: u32 = 50;

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_base_url(Self::BASE_URL)
    }

    /// Create a new client against a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self::with_base_url_and_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new client against a custom base URL with a custom timeout
    pub fn with_base_url_and_timeout(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch up to `limit` photo records
    pub async fn fetch_photos(&self, limit: u32) -> Result<Vec<Photo>> {
        let url = self.photos_url(limit);
        debug!(url = %url, "Fetching photo list");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PhotoApiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let photos: Vec<Photo> = serde_json::from_str(&body)?;
        debug!(count = photos.len(), "Fetched photo list");

        Ok(photos)
    }

    fn photos_url(&self, limit: u32) -> String {
        format!("{}/photos?_limit={}", self.base_url, limit)
    }
}

impl Default for PhotoApiClient {
    fn default() -> Self {
        Self::new()
    }
}
