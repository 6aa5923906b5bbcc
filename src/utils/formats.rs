use std::path::Path;
use std::str::FromStr;
use crate::utils::GalleryError;

/// Source formats the gallery accepts. Derivatives are always JPEG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    JPEG,
    PNG,
}

impl ImageFormat {
    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// Every accepted source format.
    pub fn all() -> &'static [ImageFormat] {
        &[ImageFormat::JPEG, ImageFormat::PNG]
    }
}

impl FromStr for ImageFormat {
    type Err = GalleryError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        ImageFormat::all()
            .iter()
            .copied()
            .find(|format| format.matches_extension(ext))
            .ok_or_else(|| GalleryError::format(format!("Unsupported image format: {}", ext)))
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<ImageFormat, GalleryError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| GalleryError::format(
            format!("File has no extension: {}", path.display())
        ))?;

    ImageFormat::from_str(ext)
}

/// Whether a filename carries one of the accepted extensions.
pub fn has_supported_extension(path: impl AsRef<Path>) -> bool {
    format_from_extension(path).is_ok()
}
