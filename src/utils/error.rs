//! Error types for the gallery optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// Validation errors for configuration and input paths.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    /// Path-related validation error
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Invalid settings error
    #[error("Settings error: {0}")]
    Settings(String),
}

/// File path errors.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    /// Directory or file does not exist
    #[error("Not found: {0}")]
    NotFound(PathBuf),
    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Main error type for the gallery optimizer.
///
/// Errors raised while processing a single source are recorded in the run
/// report and never abort a batch. Errors raised before processing starts
/// (validation, listing, output directory creation) are fatal.
#[derive(Error, Debug, Serialize)]
pub enum GalleryError {
    /// Configuration or input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Source file could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Source geometry cannot be scaled to the target width
    #[error("Degenerate image: {0}")]
    Degenerate(String),

    /// Derivative could not be encoded
    #[error("Encode error: {0}")]
    Encode(String),

    /// Unexpected failure while processing a file
    #[error("Processing error: {0}")]
    Processing(String),

    /// File IO error
    #[error("IO error: {0}")]
    IO(String),

    /// Unsupported or invalid image format
    #[error("Format error: {0}")]
    Format(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for gallery operations.
pub type GalleryResult<T> = Result<T, GalleryError>;

impl GalleryError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn degenerate<T: Into<String>>(msg: T) -> Self {
        Self::Degenerate(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }
}

impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotADirectory(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to GalleryError
impl From<io::Error> for GalleryError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

// Convert PathError to GalleryError
impl From<PathError> for GalleryError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}
