use crate::core::Variant;

/// Progress message type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressType {
    /// Source listing finished, processing begins
    Start,
    /// A derivative was written
    Derived,
    /// A derivative already existed
    Skipped,
    /// A source failed
    Error,
    /// Every source has been handled
    Complete,
}

/// Progress event emitted by the batch processor
#[derive(Debug, Clone)]
pub struct Progress {
    /// Progress type (start, derived, skipped, error, complete)
    pub progress_type: ProgressType,
    /// Number of sources fully handled so far
    pub completed_tasks: usize,
    /// Total number of sources in the run
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Source filename the event refers to
    pub file_name: Option<String>,
    /// Variant the event refers to
    pub variant: Option<Variant>,
    /// Size of the written derivative
    pub bytes: Option<u64>,
    /// Error message for failed sources
    pub error: Option<String>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(progress_type: ProgressType, completed_tasks: usize, total_tasks: usize) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            100
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            file_name: None,
            variant: None,
            bytes: None,
            error: None,
        }
    }

    pub fn start(total_tasks: usize) -> Self {
        Self::new(ProgressType::Start, 0, total_tasks)
    }

    pub fn derived(
        completed_tasks: usize,
        total_tasks: usize,
        file_name: &str,
        variant: Variant,
        bytes: u64,
    ) -> Self {
        Self {
            file_name: Some(file_name.to_string()),
            variant: Some(variant),
            bytes: Some(bytes),
            ..Self::new(ProgressType::Derived, completed_tasks, total_tasks)
        }
    }

    pub fn skipped(completed_tasks: usize, total_tasks: usize, file_name: &str, variant: Variant) -> Self {
        Self {
            file_name: Some(file_name.to_string()),
            variant: Some(variant),
            ..Self::new(ProgressType::Skipped, completed_tasks, total_tasks)
        }
    }

    pub fn error(completed_tasks: usize, total_tasks: usize, file_name: &str, error: &str) -> Self {
        Self {
            file_name: Some(file_name.to_string()),
            error: Some(error.to_string()),
            ..Self::new(ProgressType::Error, completed_tasks, total_tasks)
        }
    }

    pub fn complete(total_tasks: usize) -> Self {
        Self::new(ProgressType::Complete, total_tasks, total_tasks)
    }

    /// Renders the event as a console line. Skips are silent.
    pub fn console_line(&self) -> Option<String> {
        let file_name = self.file_name.as_deref().unwrap_or_default();
        match self.progress_type {
            ProgressType::Start => Some(format!("Found {} images to optimize...", self.total_tasks)),
            ProgressType::Derived => {
                let label = self.variant.map(|v| v.label()).unwrap_or("Derivative");
                let kb = self.bytes.unwrap_or(0) as f64 / 1024.0;
                Some(format!("  {label}: {file_name} -> {kb:.1}KB"))
            }
            ProgressType::Skipped => None,
            ProgressType::Error => Some(format!(
                "  Error processing {}: {}",
                file_name,
                self.error.as_deref().unwrap_or("unknown error")
            )),
            ProgressType::Complete => Some("\nOptimization complete!".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_lines_match_the_run_log_format() {
        assert_eq!(
            Progress::start(3).console_line().unwrap(),
            "Found 3 images to optimize..."
        );
        assert_eq!(
            Progress::derived(1, 3, "a.jpg", Variant::Thumbnail, 42_291).console_line().unwrap(),
            "  Thumbnail: a.jpg -> 41.3KB"
        );
        assert_eq!(
            Progress::error(2, 3, "bad.jpg", "Decode error: eof").console_line().unwrap(),
            "  Error processing bad.jpg: Decode error: eof"
        );
        assert!(Progress::skipped(1, 3, "a.jpg", Variant::Medium).console_line().is_none());
        assert_eq!(
            Progress::complete(3).console_line().unwrap(),
            "\nOptimization complete!"
        );
    }

    #[test]
    fn percentage_handles_empty_runs() {
        assert_eq!(Progress::new(ProgressType::Derived, 1, 4).progress_percentage, 25);
        assert_eq!(Progress::complete(0).progress_percentage, 100);
    }
}
