// src/processing/imaging/executor.rs

//! Native executor that turns one source image into its derivatives.
//!
//! Decoding, resizing and encoding are CPU-bound, so each source runs inside
//! `tokio::task::spawn_blocking` and the async runtime is never blocked.

use std::path::Path;
use image::{DynamicImage, ImageReader};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::{
    DerivativeOutcome, DerivativeSummary, DerivativeTarget, SourceFailure, SourceImage,
    SourceInfo, SourceResult, WrittenDerivative,
};
use crate::utils::{GalleryError, GalleryResult, path_exists};

use super::formats::save_jpeg;
use super::resize::{apply_resize, normalize_color};

/// Executor that derives images in-process with the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct NativeExecutor {
    quality: u8,
}

impl NativeExecutor {
    pub fn new(quality: u8) -> Self {
        Self { quality }
    }

    /// Runs [`derive`](Self::derive) for `task` on the blocking thread pool.
    pub fn spawn(&self, task: SourceImage) -> JoinHandle<SourceResult> {
        let executor = *self;
        tokio::task::spawn_blocking(move || executor.derive(&task))
    }

    /// Produces every missing derivative of one source.
    ///
    /// Derivatives whose output path already exists are skipped without
    /// looking at the source. When nothing is missing the source is not
    /// opened at all. On failure the derivatives already written travel with
    /// the error.
    pub fn derive(&self, task: &SourceImage) -> SourceResult {
        let mut summary = DerivativeSummary {
            filename: task.filename.clone(),
            source: None,
            thumbnail: DerivativeOutcome::Skipped,
            medium: DerivativeOutcome::Skipped,
        };

        let pending: Vec<&DerivativeTarget> = task
            .targets
            .iter()
            .filter(|target| !path_exists(&target.output_path))
            .collect();

        if pending.is_empty() {
            debug!("'{}': all derivatives present", task.filename);
            return Ok(summary);
        }

        let image = load_source(&task.input_path)?;
        let info = SourceInfo {
            width: image.width(),
            height: image.height(),
            color_mode: format!("{:?}", image.color()),
        };
        debug!(
            "Loaded '{}': {}×{} {}",
            task.filename, info.width, info.height, info.color_mode
        );
        summary.source = Some(info);

        let image = normalize_color(image);

        let mut written = Vec::new();
        for target in pending {
            match self.write_target(&image, target) {
                Ok(derivative) => {
                    debug!(
                        "'{}' → {} {}×{} ({} bytes)",
                        task.filename,
                        target.variant.label(),
                        derivative.width,
                        derivative.height,
                        derivative.bytes
                    );
                    summary.set_outcome(
                        target.variant,
                        DerivativeOutcome::Written {
                            width: derivative.width,
                            height: derivative.height,
                            bytes: derivative.bytes,
                        },
                    );
                    written.push(derivative);
                }
                Err(error) => return Err(SourceFailure { error, written }),
            }
        }

        Ok(summary)
    }

    fn write_target(
        &self,
        image: &DynamicImage,
        target: &DerivativeTarget,
    ) -> GalleryResult<WrittenDerivative> {
        let resized = apply_resize(image, target.width)?;
        let bytes = save_jpeg(&resized, &target.output_path, self.quality)?;
        Ok(WrittenDerivative {
            variant: target.variant,
            width: resized.width(),
            height: resized.height(),
            bytes,
        })
    }
}

/// Opens and decodes a source, sniffing the real format from its content.
fn load_source(path: &Path) -> GalleryResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| GalleryError::io(format!("Cannot read '{}': {e}", path.display())))?
        .with_guessed_format()
        .map_err(|e| GalleryError::io(format!("Cannot read '{}': {e}", path.display())))?;

    reader
        .decode()
        .map_err(|e| GalleryError::decode(format!("Failed to load '{}': {e}", path.display())))
}
