//! Decoded-image cache with count and cost ceilings

use crate::types::{CacheStats, DecodedImage};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::debug;

/// An LRU cache of decoded images bounded by entry count and total byte cost.
///
/// Recency order is delegated to [`lru::LruCache`]; the count ceiling is the
/// LRU capacity and the cost ceiling is enforced by popping least-recently
/// used entries until the running total fits. Neither ceiling is ever
/// exceeded once `insert` returns.
///
/// The cache is not internally synchronized: callers that share it across
/// tasks are expected to wrap it together with any related state in a single
/// lock.
pub struct ImageCache {
    entries: LruCache<String, Arc<DecodedImage>>,
    max_total_bytes: usize,
    total_bytes: usize,
    hits: u64,
    misses: u64,
}

impl ImageCache {
    pub const DEFAULT_MAX_ENTRIES: usize = 100;
    pub const DEFAULT_MAX_TOTAL_BYTES: usize = 50 * 1024 * 1024;

    /// Create a cache with the given entry-count and byte-cost ceilings
    pub fn new(max_entries: usize, max_total_bytes: usize) -> Self {
        Self {
            entries: LruCache::new(NonZeroUsize::new(max_entries.max(1)).unwrap()),
            max_total_bytes,
            total_bytes: 0,
            hits: 0,
            misses: 0,
        }
    }

    /// Create with default ceilings (100 entries, 50 MiB)
    pub fn with_defaults() -> Self {
        Self::new(Self::DEFAULT_MAX_ENTRIES, Self::DEFAULT_MAX_TOTAL_BYTES)
    }

    /// Look up a decoded image, marking it most recently used
    pub fn get(&mut self, url: &str) -> Option<Arc<DecodedImage>> {
        match self.entries.get(url) {
            Some(image) => {
                self.hits += 1;
                Some(Arc::clone(image))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a decoded image under its source URL.
    ///
    /// The entry cost is the image's [`DecodedImage::byte_size`]. Inserting
    /// may evict least-recently used entries, including the new one when its
    /// cost alone exceeds the ceiling.
    pub fn insert(&mut self, url: String, image: Arc<DecodedImage>) {
        let cost = image.byte_size();

        if let Some((displaced_url, displaced)) = self.entries.push(url, image) {
            self.total_bytes = self.total_bytes.saturating_sub(displaced.byte_size());
            debug!(url = %displaced_url, "Displaced cache entry");
        }
        self.total_bytes += cost;

        while self.total_bytes > self.max_total_bytes {
            match self.entries.pop_lru() {
                Some((evicted_url, evicted)) => {
                    self.total_bytes = self.total_bytes.saturating_sub(evicted.byte_size());
                    debug!(url = %evicted_url, "Evicted cache entry over cost ceiling");
                }
                None => {
                    self.total_bytes = 0;
                    break;
                }
            }
        }
    }

    /// Whether a URL is resident, without touching recency order
    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains(url)
    }

    /// Drop every entry. Hit/miss counters are preserved.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.total_bytes = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    /// Current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            total_bytes: self.total_bytes,
            hits: self.hits,
            misses: self.misses,
        }
    }
}
