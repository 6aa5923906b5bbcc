//! Core types and configuration.
//!
//! This module contains the fundamental types used throughout the crate:
//! - [`GalleryConfig`]: Directories, target widths and encoder settings
//! - [`SourceImage`]: One eligible original and its derivative targets
//! - [`Variant`]: The thumbnail and medium derivative kinds
//! - [`RunReport`]: Aggregate outcome of a batch run
//! - [`Progress`]: Progress events emitted during a run

mod config;
mod progress;
mod task;
mod types;

pub use config::{
    GalleryConfig,
    DEFAULT_JPEG_QUALITY,
    DEFAULT_MEDIUM_WIDTH,
    DEFAULT_PHOTOS_DIR,
    DEFAULT_THUMBNAIL_WIDTH,
};
pub use progress::{Progress, ProgressType};
pub use task::{DerivativeTarget, SourceImage};
pub use types::{
    DerivativeOutcome, DerivativeSummary, FailedFile, RunReport, SourceFailure, SourceInfo,
    SourceResult, Variant, WrittenDerivative,
};
