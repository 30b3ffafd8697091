//! Cache types

use std::fmt::{self, Debug, Formatter};

/// A decoded bitmap ready for display: RGBA8 pixel data plus dimensions
#[derive(Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Approximate memory footprint, used as the entry cost in the cache
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}

impl Debug for DecodedImage {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("byte_size", &self.byte_size())
            .finish()
    }
}

/// Statistics about the cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub total_bytes: usize,
    pub hits: u64,
    pub misses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_size_matches_pixel_buffer() {
        let image = DecodedImage::new(2, 2, vec![0u8; 16]);
        assert_eq!(image.byte_size(), 16);
    }

    #[test]
    fn test_debug_omits_pixel_data() {
        let image = DecodedImage::new(4, 4, vec![0u8; 64]);
        let debug_str = format!("{:?}", image);
        assert!(debug_str.contains("width"));
        assert!(debug_str.contains("byte_size"));
        assert!(!debug_str.contains("pixels"));
    }

    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.total_bytes, 0);
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
    }
}
