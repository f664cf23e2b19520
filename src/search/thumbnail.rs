use image::DynamicImage;
use reqwest::Client;

use crate::error::SearchError;
use crate::search::fetch::fetch_image;

/// A decoded thumbnail ready for display (RGBA8, row-major)
#[derive(Debug, Clone, PartialEq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Download a grid thumbnail and decode it for display
pub async fn load_thumbnail(
    client: Client,
    url: String,
    max_size: u32,
) -> Result<Thumbnail, SearchError> {
    let bytes = fetch_image(client, url).await?;
    decode_thumbnail(bytes, max_size).await
}

/// Decode downloaded thumbnail bytes off the UI thread
pub async fn decode_thumbnail(bytes: Vec<u8>, max_size: u32) -> Result<Thumbnail, SearchError> {
    // Decoding is CPU-bound, keep it off the executor threads
    tokio::task::spawn_blocking(move || decode_thumbnail_blocking(&bytes, max_size))
        .await
        .map_err(|e| SearchError::Image(format!("Task join error: {}", e)))?
}

/// Decode an image and shrink it to fit inside `max_size` x `max_size`.
///
/// Images already small enough are kept at their original size.
pub fn decode_thumbnail_blocking(bytes: &[u8], max_size: u32) -> Result<Thumbnail, SearchError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| SearchError::Image(format!("Failed to decode thumbnail: {}", e)))?;

    let img = fit_within(img, max_size);
    let rgba = img.to_rgba8();

    Ok(Thumbnail {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

/// Downscale preserving aspect ratio; never upscale
fn fit_within(img: DynamicImage, max_size: u32) -> DynamicImage {
    if img.width() <= max_size && img.height() <= max_size {
        img
    } else {
        img.thumbnail(max_size, max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgb8(RgbImage::new(width, height));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_large_image_is_downscaled() {
        let thumb = decode_thumbnail_blocking(&png_bytes(800, 400), 256).unwrap();

        assert_eq!(thumb.width, 256);
        assert_eq!(thumb.height, 128);
        assert_eq!(thumb.pixels.len(), (256 * 128 * 4) as usize);
    }

    #[test]
    fn test_small_image_is_not_upscaled() {
        let thumb = decode_thumbnail_blocking(&png_bytes(100, 60), 256).unwrap();

        assert_eq!((thumb.width, thumb.height), (100, 60));
    }

    #[test]
    fn test_garbage_bytes_fail() {
        let result = decode_thumbnail_blocking(b"definitely not an image", 256);
        assert!(matches!(result, Err(SearchError::Image(_))));
    }

    #[tokio::test]
    async fn test_async_decode() {
        let thumb = decode_thumbnail(png_bytes(512, 512), 128).await.unwrap();
        assert_eq!((thumb.width, thumb.height), (128, 128));
    }
}
