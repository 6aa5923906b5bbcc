//! Source image task definition and creation.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use serde::Serialize;
use crate::core::{GalleryConfig, Variant};
use crate::utils::extract_filename;

/// One derivative to produce from a source image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivativeTarget {
    pub variant: Variant,
    /// Path where the derivative is written
    pub output_path: PathBuf,
    /// Target width in pixels
    pub width: u32,
}

/// Represents one eligible original and everything derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct SourceImage {
    /// Path to the original image file
    pub input_path: PathBuf,
    /// Filename for logs and reports, lossily decoded when not UTF-8
    pub filename: String,
    /// One target per variant, in `Variant::all()` order
    pub targets: Vec<DerivativeTarget>,
}

impl SourceImage {
    /// Builds the task for `input_path`, placing each derivative under the
    /// configured variant directory with the source's exact file name bytes.
    pub fn new(input_path: impl AsRef<Path>, config: &GalleryConfig) -> Self {
        let input_path = input_path.as_ref().to_path_buf();
        let filename = extract_filename(&input_path);
        let output_name: &OsStr = input_path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&filename));
        let targets = Variant::all()
            .iter()
            .map(|variant| DerivativeTarget {
                variant: *variant,
                output_path: config.output_dir(*variant).join(output_name),
                width: config.target_width(*variant),
            })
            .collect();

        Self {
            input_path,
            filename,
            targets,
        }
    }
}
