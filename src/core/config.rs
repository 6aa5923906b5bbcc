//! Run configuration: directories, target widths and encoder settings.

use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::core::Variant;
use crate::utils::{GalleryError, GalleryResult};

pub const DEFAULT_PHOTOS_DIR: &str = "photos";
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 600;
pub const DEFAULT_MEDIUM_WIDTH: u32 = 1600;
pub const DEFAULT_JPEG_QUALITY: u8 = 85;

/// Settings for one batch run.
///
/// Every key is optional in the JSON file; missing keys keep their defaults.
/// Output directories left unset resolve under `photos_dir`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    /// Directory holding the original photos
    pub photos_dir: PathBuf,
    /// Thumbnail output directory, `<photos_dir>/thumbnails` when unset
    pub thumbnails_dir: Option<PathBuf>,
    /// Medium output directory, `<photos_dir>/medium` when unset
    pub medium_dir: Option<PathBuf>,
    /// Thumbnail width in pixels
    pub thumbnail_width: u32,
    /// Medium width in pixels
    pub medium_width: u32,
    /// JPEG quality (1-100)
    pub jpeg_quality: u8,
    /// Number of source images processed concurrently
    pub jobs: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            photos_dir: PathBuf::from(DEFAULT_PHOTOS_DIR),
            thumbnails_dir: None,
            medium_dir: None,
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            medium_width: DEFAULT_MEDIUM_WIDTH,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            jobs: 1,
        }
    }
}

impl GalleryConfig {
    /// Loads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GalleryError::config(
                format!("Failed to read config {}: {}", path.display(), e)
            ))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| GalleryError::config(
                format!("Failed to parse config {}: {}", path.display(), e)
            ))?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn thumbnails_dir(&self) -> PathBuf {
        self.output_dir(Variant::Thumbnail)
    }

    pub fn medium_dir(&self) -> PathBuf {
        self.output_dir(Variant::Medium)
    }

    /// Resolves the output directory of `variant`.
    pub fn output_dir(&self, variant: Variant) -> PathBuf {
        let configured = match variant {
            Variant::Thumbnail => self.thumbnails_dir.as_ref(),
            Variant::Medium => self.medium_dir.as_ref(),
        };
        configured
            .cloned()
            .unwrap_or_else(|| self.photos_dir.join(variant.default_dir_name()))
    }

    pub fn target_width(&self, variant: Variant) -> u32 {
        match variant {
            Variant::Thumbnail => self.thumbnail_width,
            Variant::Medium => self.medium_width,
        }
    }
}
