/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the media layer, the API client and the UI layer.
use iced::widget::image::Handle;
use std::fmt;
use std::sync::Arc;

/// Highest spice level the service predicts
pub const MAX_SPICE_LEVEL: u8 = 5;

/// Content type used when the file signature is not recognised
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// A spice level in the closed range 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpiceLevel(u8);

impl SpiceLevel {
    /// Levels a user can claim in feedback (0 is never a valid correction)
    pub const FEEDBACK_CHOICES: [SpiceLevel; 5] = [
        SpiceLevel(1),
        SpiceLevel(2),
        SpiceLevel(3),
        SpiceLevel(4),
        SpiceLevel(5),
    ];

    pub fn new(value: u8) -> Option<Self> {
        (value <= MAX_SPICE_LEVEL).then_some(Self(value))
    }

    /// Validate an integer received from the prediction service
    pub fn from_wire(value: i64) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SpiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The raw file chosen by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    /// Filename only (e.g., "mapo_tofu.jpg")
    pub file_name: String,
    /// MIME type sniffed from the file signature
    pub content_type: String,
    /// File contents, shared between the session and in-flight requests
    pub bytes: Arc<[u8]>,
}

impl SelectedImage {
    /// Wrap file contents, sniffing the content type from the leading bytes.
    /// No validation happens here; the service decides what it accepts.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let content_type = infer::get(&bytes)
            .map(|kind| kind.mime_type())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        Self {
            file_name: file_name.into(),
            content_type,
            bytes: bytes.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}

/// A renderable handle derived from a `SelectedImage`
#[derive(Debug, Clone)]
pub struct Preview {
    handle: Handle,
    /// Pixel size after downscaling, None when the bytes could not be decoded locally
    dimensions: Option<(u32, u32)>,
}

impl Preview {
    pub fn decoded(handle: Handle, width: u32, height: u32) -> Self {
        Self {
            handle,
            dimensions: Some((width, height)),
        }
    }

    /// Preview for formats the image crate cannot decode (HEIC and friends)
    pub fn undecoded(handle: Handle) -> Self {
        Self {
            handle,
            dimensions: None,
        }
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

/// A selected image together with its preview.
///
/// The pair only ever moves as a unit, so a preview exists exactly when an
/// image does.
#[derive(Debug, Clone)]
pub struct Upload {
    pub image: SelectedImage,
    pub preview: Preview,
}

impl Upload {
    pub fn new(image: SelectedImage, preview: Preview) -> Self {
        Self { image, preview }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_spice_level_bounds() {
        assert_eq!(SpiceLevel::new(0).map(SpiceLevel::get), Some(0));
        assert_eq!(SpiceLevel::new(5).map(SpiceLevel::get), Some(5));
        assert!(SpiceLevel::new(6).is_none());
    }

    #[test]
    fn test_from_wire_rejects_out_of_range() {
        assert_eq!(SpiceLevel::from_wire(3).map(SpiceLevel::get), Some(3));
        assert!(SpiceLevel::from_wire(-1).is_none());
        assert!(SpiceLevel::from_wire(6).is_none());
        assert!(SpiceLevel::from_wire(i64::MAX).is_none());
    }

    #[test]
    fn test_feedback_choices_exclude_zero() {
        let values: Vec<u8> = SpiceLevel::FEEDBACK_CHOICES.iter().map(|l| l.get()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_content_type_sniffing() {
        let mut png = PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&[0; 16]);
        let image = SelectedImage::new("dish.png", png);
        assert_eq!(image.content_type, "image/png");

        let unknown = SelectedImage::new("notes.txt", b"hello".to_vec());
        assert_eq!(unknown.content_type, FALLBACK_CONTENT_TYPE);
        assert_eq!(unknown.len(), 5);
    }
}
