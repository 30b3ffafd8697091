//! Decoding fetched bytes into displayable bitmaps

use crate::error::{LoadError, Result};
use memory_image_cache::DecodedImage;
use tracing::debug;

/// Decode compressed image bytes (JPEG, PNG, ...) into an RGBA8 bitmap.
///
/// Decoding is CPU-bound, so it runs on the blocking thread pool.
pub(crate) async fn decode_image(bytes: Vec<u8>) -> Result<DecodedImage> {
    tokio::task::spawn_blocking(move || decode_image_sync(&bytes))
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))?
}

fn decode_image_sync(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixels = rgba.into_raw();
    debug!(width, height, "Decoded image");

    Ok(DecodedImage::new(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([12, 34, 56, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[tokio::test]
    async fn test_decode_png() {
        let image = decode_image(png_bytes(3, 2)).await.unwrap();
        assert_eq!(image.width, 3);
        assert_eq!(image.height, 2);
        assert_eq!(image.byte_size(), 3 * 2 * 4);
    }

    #[tokio::test]
    async fn test_decode_rejects_garbage() {
        let result = decode_image(b"definitely not an image".to_vec()).await;
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }
}
