//! Core types for derivative variants, per-file outcomes and run reports.

use serde::{Deserialize, Serialize};
use crate::utils::GalleryError;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// A derivative kind produced for every source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Small derivative rendered in the gallery grid
    Thumbnail,
    /// Larger derivative shown in the lightbox
    Medium,
}

impl Variant {
    /// Human-readable name used in progress lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thumbnail => "Thumbnail",
            Self::Medium => "Medium",
        }
    }

    /// Name of the variant directory under the photos directory.
    pub fn default_dir_name(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnails",
            Self::Medium => "medium",
        }
    }

    /// Returns all variants in processing order.
    pub fn all() -> &'static [Variant] {
        &[Variant::Thumbnail, Variant::Medium]
    }
}

/// What happened to one derivative of one source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DerivativeOutcome {
    /// A new derivative was encoded and written
    Written {
        width: u32,
        height: u32,
        bytes: u64,
    },
    /// The output path already existed
    Skipped,
}

impl DerivativeOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written { .. })
    }
}

/// Properties of a decoded source image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    /// Decoded colour mode before normalisation, e.g. `Rgba8`
    pub color_mode: String,
}

/// Successful processing of one source image.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivativeSummary {
    /// Source filename, which is also the derivative filename
    pub filename: String,
    /// `None` when every derivative already existed and the source was never opened
    pub source: Option<SourceInfo>,
    pub thumbnail: DerivativeOutcome,
    pub medium: DerivativeOutcome,
}

impl DerivativeSummary {
    pub fn outcome(&self, variant: Variant) -> DerivativeOutcome {
        match variant {
            Variant::Thumbnail => self.thumbnail,
            Variant::Medium => self.medium,
        }
    }

    pub fn set_outcome(&mut self, variant: Variant, outcome: DerivativeOutcome) {
        match variant {
            Variant::Thumbnail => self.thumbnail = outcome,
            Variant::Medium => self.medium = outcome,
        }
    }
}

/// A derivative that reached disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WrittenDerivative {
    pub variant: Variant,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
}

/// Failure of one source, together with the derivatives written before it.
#[derive(Debug)]
pub struct SourceFailure {
    pub error: GalleryError,
    pub written: Vec<WrittenDerivative>,
}

impl From<GalleryError> for SourceFailure {
    fn from(error: GalleryError) -> Self {
        Self {
            error,
            written: Vec::new(),
        }
    }
}

/// Result of processing one source image.
pub type SourceResult = Result<DerivativeSummary, SourceFailure>;

/// A source image that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedFile {
    pub filename: String,
    pub error: String,
    /// Derivatives left on disk by this source before it failed
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub written: Vec<WrittenDerivative>,
}

/// Aggregate outcome of a batch run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Number of eligible source images found
    pub sources_found: usize,
    /// Successfully processed sources, in listing order
    pub derived: Vec<DerivativeSummary>,
    /// Failed sources, in listing order
    pub failures: Vec<FailedFile>,
    /// Total size of the thumbnail directory after the run
    pub thumbnails_bytes: u64,
    /// Total size of the medium directory after the run
    pub medium_bytes: u64,
}

impl RunReport {
    pub fn new(sources_found: usize) -> Self {
        Self {
            sources_found,
            ..Self::default()
        }
    }

    /// Records the result of processing one source.
    pub fn record(&mut self, filename: &str, result: SourceResult) {
        match result {
            Ok(summary) => self.derived.push(summary),
            Err(failure) => self.failures.push(FailedFile {
                filename: filename.to_string(),
                error: failure.error.to_string(),
                written: failure.written,
            }),
        }
    }

    pub fn succeeded(&self) -> usize {
        self.derived.len()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Number of derivatives of `variant` written during this run, including
    /// those left behind by sources that failed afterwards.
    pub fn written(&self, variant: Variant) -> usize {
        let from_failures = self
            .failures
            .iter()
            .flat_map(|failed| &failed.written)
            .filter(|derivative| derivative.variant == variant)
            .count();
        self.derived
            .iter()
            .filter(|summary| summary.outcome(variant).is_written())
            .count()
            + from_failures
    }

    /// Number of derivatives of `variant` that already existed.
    pub fn skipped(&self, variant: Variant) -> usize {
        self.derived
            .iter()
            .filter(|summary| summary.outcome(variant) == DerivativeOutcome::Skipped)
            .count()
    }

    pub fn dir_bytes(&self, variant: Variant) -> u64 {
        match variant {
            Variant::Thumbnail => self.thumbnails_bytes,
            Variant::Medium => self.medium_bytes,
        }
    }

    pub fn set_dir_bytes(&mut self, variant: Variant, bytes: u64) {
        match variant {
            Variant::Thumbnail => self.thumbnails_bytes = bytes,
            Variant::Medium => self.medium_bytes = bytes,
        }
    }

    /// Final size summary lines, one per output directory.
    pub fn summary_lines(&self) -> Vec<String> {
        Variant::all()
            .iter()
            .map(|variant| {
                let name = match variant {
                    Variant::Thumbnail => "Thumbnails",
                    Variant::Medium => "Medium",
                };
                format!(
                    "{} total: {:.1}MB",
                    name,
                    self.dir_bytes(*variant) as f64 / BYTES_PER_MB
                )
            })
            .collect()
    }
}
