//! Browser configuration

use std::time::Duration;

/// Runtime configuration for the photo browser
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// How many photo records to fetch
    pub photo_limit: u32,
    /// How many list rows are visible at once
    pub visible_rows: usize,
    /// Image cache entry-count ceiling
    pub cache_max_entries: usize,
    /// Image cache byte-cost ceiling
    pub cache_max_bytes: usize,
    /// Transport connect timeout
    pub connect_timeout: Duration,
    /// Transport total per-request deadline
    pub request_deadline: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            photo_limit: 50,
            visible_rows: 12,
            cache_max_entries: 100,
            cache_max_bytes: 50 * 1024 * 1024,
            connect_timeout: Duration::from_secs(30),
            request_deadline: Duration::from_secs(60),
        }
    }
}
