use crate::core::{
    DerivativeOutcome, GalleryConfig, Progress, RunReport, SourceFailure, SourceImage,
    SourceResult, Variant,
};
use crate::processing::imaging::NativeExecutor;
use crate::utils::{
    GalleryError, GalleryResult, dir_size, ensure_output_dirs, list_source_images, validate_config,
};
use tracing::{debug, info, warn};

/// Drives a full derivation run over the photos directory
pub struct BatchProcessor {
    config: GalleryConfig,
    executor: NativeExecutor,
}

impl BatchProcessor {
    pub fn new(config: GalleryConfig) -> Self {
        let executor = NativeExecutor::new(config.jpeg_quality);
        Self { config, executor }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Derives every eligible source and returns the aggregate report.
    ///
    /// Only setup failures are returned as `Err`: an invalid config, output
    /// directories that cannot be created, or an unreadable photos
    /// directory. A source that fails is recorded in the report and the run
    /// moves on to the next one.
    ///
    /// Sources are handled in chunks of `jobs`. Within a chunk they run
    /// concurrently, and results are collected in listing order.
    pub async fn run(&self, progress_callback: impl Fn(Progress)) -> GalleryResult<RunReport> {
        validate_config(&self.config)?;
        ensure_output_dirs(&self.config).await?;

        let sources = list_source_images(&self.config.photos_dir).await?;
        let total_tasks = sources.len();
        info!(
            "Found {} source images in {}",
            total_tasks,
            self.config.photos_dir.display()
        );
        progress_callback(Progress::start(total_tasks));

        let tasks: Vec<SourceImage> = sources
            .iter()
            .map(|path| SourceImage::new(path, &self.config))
            .collect();

        let jobs = self.config.jobs.max(1);
        let total_chunks = tasks.len().div_ceil(jobs);
        let mut report = RunReport::new(total_tasks);
        let mut completed = 0;

        for (chunk_index, chunk) in tasks.chunks(jobs).enumerate() {
            // Only log at important milestones to reduce noise
            if jobs > 1 && (chunk_index == 0 || chunk_index + 1 == total_chunks || chunk_index % 10 == 0) {
                debug!("Processing chunk {}/{}", chunk_index + 1, total_chunks);
            }

            let handles: Vec<_> = chunk
                .iter()
                .map(|task| (task.filename.clone(), self.executor.spawn(task.clone())))
                .collect();

            for (filename, handle) in handles {
                let result = match handle.await {
                    Ok(result) => result,
                    Err(e) => Err(SourceFailure::from(GalleryError::processing(format!(
                        "Task panicked: {e}"
                    )))),
                };
                completed += 1;
                emit_result(&progress_callback, completed, total_tasks, &filename, &result);
                report.record(&filename, result);
            }
        }

        for variant in Variant::all() {
            let bytes = dir_size(self.config.output_dir(*variant)).await?;
            report.set_dir_bytes(*variant, bytes);
        }

        progress_callback(Progress::complete(total_tasks));

        if report.failed() > 0 {
            warn!(
                "Run completed with {} failed images out of {}",
                report.failed(),
                total_tasks
            );
        } else {
            info!(
                "Run completed: {} thumbnails and {} medium images written",
                report.written(Variant::Thumbnail),
                report.written(Variant::Medium)
            );
        }

        Ok(report)
    }
}

/// Translates one per-source result into progress events.
fn emit_result(
    progress_callback: &impl Fn(Progress),
    completed: usize,
    total: usize,
    filename: &str,
    result: &SourceResult,
) {
    match result {
        Ok(summary) => {
            for variant in Variant::all() {
                let progress = match summary.outcome(*variant) {
                    DerivativeOutcome::Written { bytes, .. } => {
                        Progress::derived(completed, total, filename, *variant, bytes)
                    }
                    DerivativeOutcome::Skipped => {
                        Progress::skipped(completed, total, filename, *variant)
                    }
                };
                progress_callback(progress);
            }
        }
        Err(failure) => {
            for derivative in &failure.written {
                progress_callback(Progress::derived(
                    completed,
                    total,
                    filename,
                    derivative.variant,
                    derivative.bytes,
                ));
            }
            warn!("Error processing {}: {}", filename, failure.error);
            progress_callback(Progress::error(
                completed,
                total,
                filename,
                &failure.error.to_string(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use crate::core::ProgressType;
    use image::RgbImage;

    #[tokio::test]
    async fn progress_follows_listing_and_ends_with_complete() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(30, 20).save(dir.path().join("only.png")).unwrap();

        let config = GalleryConfig {
            photos_dir: dir.path().to_path_buf(),
            thumbnail_width: 15,
            medium_width: 60,
            ..GalleryConfig::default()
        };
        let events = RefCell::new(Vec::new());
        let report = BatchProcessor::new(config)
            .run(|progress| events.borrow_mut().push(progress))
            .await
            .unwrap();

        let kinds: Vec<ProgressType> = events.borrow().iter().map(|p| p.progress_type).collect();
        assert_eq!(
            kinds,
            vec![
                ProgressType::Start,
                ProgressType::Derived,
                ProgressType::Derived,
                ProgressType::Complete,
            ]
        );
        assert_eq!(report.sources_found, 1);
        assert!(report.thumbnails_bytes > 0);
        assert!(report.medium_bytes > 0);
    }

    #[tokio::test]
    async fn written_derivative_is_announced_before_the_error() {
        let dir = tempfile::tempdir().unwrap();
        RgbImage::new(3000, 1).save(dir.path().join("strip.png")).unwrap();

        let config = GalleryConfig {
            photos_dir: dir.path().to_path_buf(),
            thumbnail_width: 1600,
            medium_width: 600,
            ..GalleryConfig::default()
        };
        let events = RefCell::new(Vec::new());
        let report = BatchProcessor::new(config)
            .run(|progress| events.borrow_mut().push(progress))
            .await
            .unwrap();

        let events = events.into_inner();
        let kinds: Vec<ProgressType> = events.iter().map(|p| p.progress_type).collect();
        assert_eq!(
            kinds,
            vec![
                ProgressType::Start,
                ProgressType::Derived,
                ProgressType::Error,
                ProgressType::Complete,
            ]
        );
        assert_eq!(events[1].variant, Some(Variant::Thumbnail));
        assert_eq!(report.failed(), 1);
        assert_eq!(report.written(Variant::Thumbnail), 1);
        assert_eq!(report.thumbnails_bytes, events[1].bytes.unwrap());
    }

    #[tokio::test]
    async fn invalid_config_is_fatal_and_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GalleryConfig {
            photos_dir: dir.path().to_path_buf(),
            jpeg_quality: 0,
            ..GalleryConfig::default()
        };

        let err = BatchProcessor::new(config).run(|_| {}).await.unwrap_err();
        assert!(matches!(err, GalleryError::Validation(_)));
        assert!(!dir.path().join("thumbnails").exists());
    }
}
