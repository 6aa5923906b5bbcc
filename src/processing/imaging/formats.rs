// src/processing/imaging/formats.rs

//! JPEG encoding of derivatives.
//!
//! Every derivative is JPEG regardless of the source format, so the output
//! keeps the source filename but not necessarily a matching extension.

use std::path::Path;
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use crate::utils::GalleryError;

type Result<T> = std::result::Result<T, GalleryError>;

/// Encodes `image` as a baseline JPEG at `quality` (1-100).
///
/// The encoder uses standard Huffman tables and has no optimised-table pass.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    image
        .write_with_encoder(encoder)
        .map_err(|e| GalleryError::encode(format!("JPEG encode failed: {e}")))?;
    Ok(buffer)
}

/// Encodes `image` and writes it to `output_path` in a single write.
///
/// Returns the number of bytes written.
pub fn save_jpeg(image: &DynamicImage, output_path: &Path, quality: u8) -> Result<u64> {
    let encoded = encode_jpeg(image, quality)?;
    std::fs::write(output_path, &encoded).map_err(|e| {
        GalleryError::io(format!("Failed to write '{}': {e}", output_path.display()))
    })?;
    Ok(encoded.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn output_is_a_decodable_jpeg() {
        let encoded = encode_jpeg(&gradient(64, 48), 85).unwrap();
        assert_eq!(image::guess_format(&encoded).unwrap(), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&encoded).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn lower_quality_yields_smaller_files() {
        let image = gradient(128, 128);
        let high = encode_jpeg(&image, 95).unwrap();
        let low = encode_jpeg(&image, 20).unwrap();
        assert!(low.len() < high.len());
    }

    #[test]
    fn save_reports_the_written_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");

        let bytes = save_jpeg(&gradient(32, 32), &path, 85).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), bytes);
        // the extension says png, the content is JPEG
        let content = std::fs::read(&path).unwrap();
        assert_eq!(image::guess_format(&content).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn writing_into_a_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.jpg");
        assert!(matches!(
            save_jpeg(&gradient(8, 8), &path, 85),
            Err(GalleryError::IO(_))
        ));
    }
}
