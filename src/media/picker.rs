/// Native file picker and file loading
use rfd::AsyncFileDialog;
use std::path::{Path, PathBuf};

use super::preview::generate_preview;
use crate::error::MediaError;
use crate::state::data::{SelectedImage, Upload};

/// Extensions offered by the picker filter (the service decides what it accepts)
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "heic", "heif", "webp", "gif", "bmp", "tif", "tiff",
];

/// Show the native file dialog and load the chosen file.
/// Returns None when the user cancels.
pub async fn choose_image() -> Option<Result<Upload, MediaError>> {
    let handle = AsyncFileDialog::new()
        .set_title("Choose a photo of your dish")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
        .await?;

    Some(load_upload(handle.path().to_path_buf()).await)
}

/// Read a file and build its preview
pub async fn load_upload(path: PathBuf) -> Result<Upload, MediaError> {
    let bytes = tokio::fs::read(&path).await.map_err(|e| MediaError::Read {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let image = SelectedImage::new(file_name(&path), bytes);
    tracing::info!(
        file = %image.file_name,
        content_type = %image.content_type,
        bytes = image.len(),
        "Loaded image"
    );

    let preview = generate_preview(image.clone()).await?;
    Ok(Upload::new(image, preview))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_upload_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("laksa.jpg");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0, 0]).unwrap();

        let upload = load_upload(path).await.unwrap();
        assert_eq!(upload.image.file_name, "laksa.jpg");
        assert_eq!(upload.image.content_type, "image/jpeg");
        assert_eq!(upload.image.len(), 6);
        // Truncated JPEG: no decoded size, but still something to show
        assert_eq!(upload.preview.dimensions(), None);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");

        let err = load_upload(path.clone()).await.unwrap_err();
        assert!(matches!(err, MediaError::Read { path: p, .. } if p == path));
    }
}
