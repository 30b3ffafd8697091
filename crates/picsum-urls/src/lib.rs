//! Deterministic Lorem Picsum image URL building
//!
//! Maps a photo id to the thumbnail and full-size image URLs the browsing
//! client requests. Pure functions, no state: the same id always produces
//! the same URLs.

/// Base URL of the Lorem Picsum image service
pub const IMAGE_BASE_URL: &str = "https://picsum.photos";
/// Width/height path segment for list thumbnails
pub const THUMBNAIL_SIZE: &str = "150/150";
/// Width/height path segment for full-size images
pub const FULL_IMAGE_SIZE: &str = "600/400";

/// Thumbnail URL for a photo id
pub fn thumbnail_url(photo_id: u64) -> String {
    format!("{}/{}?random={}", IMAGE_BASE_URL, THUMBNAIL_SIZE, photo_id)
}

/// Full-size image URL for a photo id
pub fn full_image_url(photo_id: u64) -> String {
    format!("{}/{}?random={}", IMAGE_BASE_URL, FULL_IMAGE_SIZE, photo_id)
}
