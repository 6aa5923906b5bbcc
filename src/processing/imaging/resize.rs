// src/processing/imaging/resize.rs

//! Width-driven resize and colour-mode normalisation.

use image::imageops::FilterType;
use image::{ColorType, DynamicImage};
use crate::utils::GalleryError;

type Result<T> = std::result::Result<T, GalleryError>;

/// Computes the derivative size for a source of `width`×`height` scaled to
/// `target_width`, preserving aspect ratio.
///
/// Height is `round(height × target_width / width)`. Sources narrower than
/// the target are scaled up.
pub fn target_dimensions(width: u32, height: u32, target_width: u32) -> Result<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(GalleryError::degenerate(format!(
            "source is {width}×{height}"
        )));
    }
    if target_width == 0 {
        return Err(GalleryError::degenerate("target width is 0"));
    }

    let scaled = (f64::from(height) * f64::from(target_width) / f64::from(width)).round();
    if scaled < 1.0 || scaled > f64::from(u32::MAX) {
        return Err(GalleryError::degenerate(format!(
            "{width}×{height} cannot be scaled to width {target_width} (height {scaled})"
        )));
    }

    Ok((target_width, scaled as u32))
}

/// Converts anything the JPEG encoder cannot take (alpha, 16-bit, float) to
/// 8-bit RGB. 8-bit RGB and 8-bit greyscale pass through untouched.
///
/// Alpha is discarded, not composited onto a background.
pub fn normalize_color(image: DynamicImage) -> DynamicImage {
    match image.color() {
        ColorType::Rgb8 | ColorType::L8 => image,
        _ => DynamicImage::ImageRgb8(image.to_rgb8()),
    }
}

/// Resizes `image` to exactly `target_width` wide with Lanczos3 resampling.
pub fn apply_resize(image: &DynamicImage, target_width: u32) -> Result<DynamicImage> {
    let (width, height) = target_dimensions(image.width(), image.height(), target_width)?;
    Ok(image.resize_exact(width, height, FilterType::Lanczos3))
}
