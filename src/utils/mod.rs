pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{GalleryError, GalleryResult, PathError, ValidationError};
pub use validation::validate_config;
pub use formats::{ImageFormat, format_from_extension, has_supported_extension};
pub use fs::{
    create_dir_all,
    dir_size,
    ensure_output_dirs,
    extract_filename,
    list_source_images,
    path_exists,
};
