use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use crate::core::{GalleryConfig, Variant};
use crate::utils::{GalleryError, GalleryResult, has_supported_extension};

/// Lists eligible source images directly inside `dir`, in directory order.
///
/// An entry is eligible when its extension is accepted and it resolves to a
/// regular file. Subdirectories (including the derivative directories when
/// they live under the photos directory) are never returned.
pub async fn list_source_images(dir: impl AsRef<Path>) -> GalleryResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| GalleryError::io(
            format!("Failed to read source directory {}: {}", dir.display(), e)
        ))?;

    let mut sources = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| GalleryError::io(
            format!("Failed to list source directory {}: {}", dir.display(), e)
        ))?
    {
        let path = entry.path();
        if !has_supported_extension(&path) {
            continue;
        }

        // metadata() follows symlinks, so a link to a photo still counts
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => sources.push(path),
            Ok(_) => debug!("Skipping non-file entry: {}", path.display()),
            Err(e) => warn!("Skipping unreadable entry {}: {}", path.display(), e),
        }
    }

    Ok(sources)
}

/// Creates a directory and its parents if absent.
pub async fn create_dir_all(path: impl AsRef<Path>) -> GalleryResult<()> {
    let path = path.as_ref();
    fs::create_dir_all(path)
        .await
        .map_err(|e| GalleryError::io(
            format!("Failed to create directory {}: {}", path.display(), e)
        ))
}

/// Creates the output directory of every variant.
///
/// Failure here is fatal for the run: without output directories no
/// derivative can be written.
pub async fn ensure_output_dirs(config: &GalleryConfig) -> GalleryResult<()> {
    for variant in Variant::all() {
        let dir = config.output_dir(*variant);
        create_dir_all(&dir).await?;
        debug!("{} directory ready: {}", variant.label(), dir.display());
    }
    Ok(())
}

/// Sum of the sizes of the regular files directly inside `dir`.
///
/// A missing directory counts as empty.
pub async fn dir_size(dir: impl AsRef<Path>) -> GalleryResult<u64> {
    let dir = dir.as_ref();
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(e) => return Err(e.into()),
    };

    let mut total = 0;
    while let Some(entry) = entries.next_entry().await? {
        let meta = entry.metadata().await?;
        if meta.is_file() {
            total += meta.len();
        }
    }
    Ok(total)
}

/// Check if a path exists, treating permission errors as "exists" so the
/// caller never overwrites something it cannot inspect.
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().try_exists().unwrap_or(true)
}

/// Extracts the file name component for display.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
