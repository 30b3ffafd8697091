//! In-memory decoded-image cache
//!
//! Stores decoded bitmaps keyed by their source URL, bounded by both an
//! entry-count ceiling and a total byte-cost ceiling, with LRU eviction
//! and hit/miss statistics.

mod cache;
mod types;

pub use cache::ImageCache;
pub use types::{CacheStats, DecodedImage};
