// Module declarations in dependency order
pub mod cli;
pub mod core;
pub mod processing;
pub mod utils;

// Public exports for external consumers
pub use crate::core::{
    DerivativeOutcome, DerivativeSummary, FailedFile, GalleryConfig, Progress, ProgressType,
    RunReport, SourceFailure, SourceImage, SourceResult, Variant, WrittenDerivative,
};
pub use crate::processing::{BatchProcessor, NativeExecutor};
pub use crate::utils::{GalleryError, GalleryResult};
