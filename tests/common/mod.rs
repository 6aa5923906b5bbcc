//! Shared fixtures for integration tests.
//!
//! Builds photo directories in a [`TempDir`] with real encoded images so the
//! derivation pipeline runs end to end.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use gallery_optimizer_lib::GalleryConfig;
use image::{DynamicImage, ImageFormat, ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use tempfile::TempDir;

pub struct PhotoDir {
    pub dir: TempDir,
}

impl PhotoDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Config rooted at this directory with default widths.
    pub fn config(&self) -> GalleryConfig {
        GalleryConfig {
            photos_dir: self.path().to_path_buf(),
            ..GalleryConfig::default()
        }
    }

    /// Config rooted at this directory with small widths for fast runs.
    pub fn small_config(&self) -> GalleryConfig {
        GalleryConfig {
            thumbnail_width: 32,
            medium_width: 96,
            ..self.config()
        }
    }

    /// Writes an RGB photo: PNG for `.png` names, JPEG otherwise.
    pub fn add_rgb(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.join(name);
        let format = if name.to_lowercase().ends_with(".png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpeg
        };
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8])
        })
        .save_with_format(&path, format)
        .expect("failed to write fixture");
        path
    }

    /// Writes a semi-transparent PNG regardless of the name's extension.
    pub fn add_rgba_png(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.join(name);
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([(x % 256) as u8, 90, (y % 256) as u8, 128])
        })
        .save_with_format(&path, ImageFormat::Png)
        .expect("failed to write fixture");
        path
    }

    /// Writes bytes that look like a JPEG header but do not decode.
    pub fn add_corrupt(&self, name: &str) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F']).unwrap();
        path
    }
}

/// Decodes a derivative by content, since its extension may not be `.jpg`.
pub fn open_derivative(path: &Path) -> DynamicImage {
    ImageReader::open(path)
        .unwrap()
        .with_guessed_format()
        .unwrap()
        .decode()
        .unwrap()
}

/// Whether the file content is a JPEG.
pub fn is_jpeg(path: &Path) -> bool {
    let bytes = std::fs::read(path).unwrap();
    matches!(image::guess_format(&bytes), Ok(ImageFormat::Jpeg))
}

/// Sorted filenames in a directory.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
