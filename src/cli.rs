use clap::Parser;
use std::path::PathBuf;
use crate::core::GalleryConfig;
use crate::utils::GalleryResult;

#[derive(Parser, Debug)]
#[command(name = "gallery-optimizer")]
#[command(author, version, about = "Generate thumbnail and medium JPEGs for the photo gallery")]
pub struct Cli {
    /// Directory holding the original photos [default: photos]
    pub photos_dir: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Thumbnail output directory [default: <PHOTOS_DIR>/thumbnails]
    #[arg(long)]
    pub thumbnails_dir: Option<PathBuf>,

    /// Medium output directory [default: <PHOTOS_DIR>/medium]
    #[arg(long)]
    pub medium_dir: Option<PathBuf>,

    /// Thumbnail width in pixels [default: 600]
    #[arg(long)]
    pub thumbnail_width: Option<u32>,

    /// Medium width in pixels [default: 1600]
    #[arg(long)]
    pub medium_width: Option<u32>,

    /// JPEG quality, 1-100 [default: 85]
    #[arg(short, long)]
    pub quality: Option<u8>,

    /// Number of images processed concurrently [default: 1]
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Print the run report as JSON instead of the size summary
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layers defaults, the config file and command-line flags, in that order.
    pub fn resolve_config(&self) -> GalleryResult<GalleryConfig> {
        let mut config = match &self.config {
            Some(path) => GalleryConfig::load(path)?,
            None => GalleryConfig::default(),
        };

        if let Some(dir) = &self.photos_dir {
            config.photos_dir = dir.clone();
        }
        if let Some(dir) = &self.thumbnails_dir {
            config.thumbnails_dir = Some(dir.clone());
        }
        if let Some(dir) = &self.medium_dir {
            config.medium_dir = Some(dir.clone());
        }
        if let Some(width) = self.thumbnail_width {
            config.thumbnail_width = width;
        }
        if let Some(width) = self.medium_width {
            config.medium_width = width;
        }
        if let Some(quality) = self.quality {
            config.jpeg_quality = quality;
        }
        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }

        Ok(config)
    }
}
