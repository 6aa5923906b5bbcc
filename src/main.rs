// Entry point for the gallery-optimizer binary.
// The lib.rs file holds everything testable; this file only wires up logging,
// argument parsing and console output.

use anyhow::Context;
use clap::Parser;
use gallery_optimizer_lib::cli::Cli;
use gallery_optimizer_lib::BatchProcessor;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stderr) // stdout carries the run log
        .compact()                // Use compact formatter instead of pretty
        .init();

    info!("=== Gallery optimizer starting ===");

    let config = cli.resolve_config().context("Failed to load configuration")?;
    debug!("Resolved configuration: {:?}", config);

    let json = cli.json;
    let processor = BatchProcessor::new(config);
    let report = processor
        .run(|progress| {
            debug!(
                "[{:>3}%] {}/{} {:?}",
                progress.progress_percentage,
                progress.completed_tasks,
                progress.total_tasks,
                progress.progress_type
            );
            if json {
                return;
            }
            if let Some(line) = progress.console_line() {
                println!("{line}");
            }
        })
        .await
        .with_context(|| {
            format!(
                "Failed to optimize images in {}",
                processor.config().photos_dir.display()
            )
        })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.summary_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
