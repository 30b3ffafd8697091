//! Loader types

use memory_image_cache::{CacheStats, DecodedImage};
use std::sync::Arc;
use std::time::Duration;

/// Configuration for the image loader
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Cache entry-count ceiling
    pub max_cache_entries: usize,
    /// Cache total decoded-byte ceiling
    pub max_cache_bytes: usize,
    /// Connection establishment timeout per fetch
    pub connect_timeout: Duration,
    /// Total deadline per fetch, covering the full response
    pub request_deadline: Duration,
}

impl LoaderConfig {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_REQUEST_DEADLINE: Duration = Duration::from_secs(60);
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_cache_entries: memory_image_cache::ImageCache::DEFAULT_MAX_ENTRIES,
            max_cache_bytes: memory_image_cache::ImageCache::DEFAULT_MAX_TOTAL_BYTES,
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            request_deadline: Self::DEFAULT_REQUEST_DEADLINE,
        }
    }
}

/// Outcome of one `load` call, delivered on the loader's completion channel.
///
/// `image` is `None` when the load failed for any reason; callers compare
/// `url` against the URL they currently care about before applying it.
#[derive(Debug, Clone)]
pub struct ImageCompletion {
    pub url: String,
    pub image: Option<Arc<DecodedImage>>,
}

/// Point-in-time loader statistics
#[derive(Debug, Clone, Default)]
pub struct LoaderStats {
    pub cache: CacheStats,
    pub in_flight: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = LoaderConfig::default();
        assert_eq!(config.max_cache_entries, 100);
        assert_eq!(config.max_cache_bytes, 50 * 1024 * 1024);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.request_deadline, Duration::from_secs(60));
    }
}
