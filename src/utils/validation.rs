use std::path::Path;
use crate::core::{GalleryConfig, Variant};
use crate::utils::{GalleryResult, ValidationError};

/// Validates a run configuration before any directory is touched
pub fn validate_config(config: &GalleryConfig) -> GalleryResult<()> {
    validate_photos_dir(&config.photos_dir)?;
    validate_settings(config)?;
    Ok(())
}

/// Validates that the photos directory exists and is a directory
pub fn validate_photos_dir(path: &Path) -> GalleryResult<()> {
    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_dir() {
        return Err(ValidationError::not_a_directory(path).into());
    }

    Ok(())
}

/// Validates widths, quality and job count
pub fn validate_settings(config: &GalleryConfig) -> GalleryResult<()> {
    for variant in Variant::all() {
        if config.target_width(*variant) == 0 {
            return Err(ValidationError::settings(
                format!("{} width cannot be 0", variant.label())
            ).into());
        }
    }

    if config.jpeg_quality == 0 || config.jpeg_quality > 100 {
        return Err(ValidationError::settings(
            format!("Invalid quality value: {}. Must be between 1 and 100", config.jpeg_quality)
        ).into());
    }

    if config.jobs == 0 {
        return Err(ValidationError::settings("Jobs cannot be 0").into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{GalleryError, PathError};

    fn config_in(dir: &Path) -> GalleryConfig {
        GalleryConfig {
            photos_dir: dir.to_path_buf(),
            ..GalleryConfig::default()
        }
    }

    #[test]
    fn default_settings_are_valid() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config(&config_in(dir.path())).is_ok());
    }

    #[test]
    fn missing_photos_dir_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = validate_config(&config_in(&dir.path().join("nope"))).unwrap_err();
        assert!(matches!(
            err,
            GalleryError::Validation(ValidationError::Path(PathError::NotFound(_)))
        ));
    }

    #[test]
    fn photos_path_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("photos.jpg");
        std::fs::write(&file, b"x").unwrap();

        let err = validate_config(&config_in(&file)).unwrap_err();
        assert!(matches!(
            err,
            GalleryError::Validation(ValidationError::Path(PathError::NotADirectory(_)))
        ));
    }

    #[test]
    fn out_of_range_settings_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let mut config = config_in(dir.path());
        config.thumbnail_width = 0;
        assert!(validate_settings(&config).is_err());

        let mut config = config_in(dir.path());
        config.jpeg_quality = 101;
        assert!(validate_settings(&config).is_err());

        let mut config = config_in(dir.path());
        config.jpeg_quality = 0;
        assert!(validate_settings(&config).is_err());

        let mut config = config_in(dir.path());
        config.jobs = 0;
        assert!(validate_settings(&config).is_err());
    }
}
