// src/processing/imaging/mod.rs

//! Native image processing via the `image` crate.
//!
//! # Architecture
//!
//! - [`NativeExecutor`]: Derives one source image, skipping existing outputs.
//! - [`resize`]: Aspect-preserving width resize and colour-mode normalisation.
//! - [`formats`]: JPEG encoding and whole-file writes.

mod executor;
mod formats;
mod resize;

pub use executor::NativeExecutor;
pub use formats::{encode_jpeg, save_jpeg};
pub use resize::{apply_resize, normalize_color, target_dimensions};
