/// Preview generation for the selected image
/// Decodes and downscales with the image crate; anything it cannot decode is
/// handed to the renderer as-is
use iced::widget::image::Handle;
use image::imageops::FilterType;

use crate::error::MediaError;
use crate::state::data::{Preview, SelectedImage};

/// Longest edge of a generated preview
const PREVIEW_MAX_EDGE: u32 = 1024;

/// Generate a preview for `image`
pub async fn generate_preview(image: SelectedImage) -> Result<Preview, MediaError> {
    // Spawn blocking task for CPU-bound work
    tokio::task::spawn_blocking(move || build_preview(&image.bytes))
        .await
        .map_err(|e| MediaError::Task(e.to_string()))
}

/// Blocking version of preview generation
pub fn build_preview(bytes: &[u8]) -> Preview {
    match image::load_from_memory(bytes) {
        Ok(decoded) => {
            let scaled = if decoded.width() > PREVIEW_MAX_EDGE || decoded.height() > PREVIEW_MAX_EDGE {
                decoded.resize(PREVIEW_MAX_EDGE, PREVIEW_MAX_EDGE, FilterType::Lanczos3)
            } else {
                decoded
            };

            let rgba = scaled.to_rgba8();
            let (width, height) = rgba.dimensions();
            tracing::debug!(width, height, "Generated preview");

            Preview::decoded(Handle::from_rgba(width, height, rgba.into_raw()), width, height)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Preview decode failed, passing raw bytes to the renderer");
            Preview::undecoded(Handle::from_bytes(bytes.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buffer = Vec::new();
        DynamicImage::ImageRgba8(RgbaImage::new(width, height))
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_small_image_keeps_size() {
        let preview = build_preview(&png(4, 3));
        assert_eq!(preview.dimensions(), Some((4, 3)));
    }

    #[test]
    fn test_large_image_is_downscaled() {
        let preview = build_preview(&png(3000, 1500));
        assert_eq!(preview.dimensions(), Some((1024, 512)));
    }

    #[test]
    fn test_undecodable_bytes_still_get_a_preview() {
        let preview = build_preview(b"ftypheic but not really");
        assert_eq!(preview.dimensions(), None);
    }

    #[tokio::test]
    async fn test_generate_preview_off_thread() {
        let image = SelectedImage::new("dish.png", png(8, 8));
        let preview = generate_preview(image).await.unwrap();
        assert_eq!(preview.dimensions(), Some((8, 8)));
    }
}
