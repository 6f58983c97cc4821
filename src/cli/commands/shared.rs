//! Shared components for CLI commands

use crate::cli::args::Args;
use crate::config::ConverterConfig;
use crate::geocode::{GoogleGeocoder, PlaceResolver};
use crate::models::ConversionReport;
use anyhow::{Context, Result};
use colored::*;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Outcome of a CLI run for reporting
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Conversion statistics merged over all input files
    pub report: ConversionReport,
    /// GeoJSON file that was written
    pub output_path: PathBuf,
    /// Size of the written file in bytes
    pub output_size: u64,
    /// Total processing time
    pub processing_time: Duration,
}

impl RunSummary {
    /// Format a byte count in human-readable form
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    pub fn print(&self) {
        let report = &self.report;

        println!("\n{}", "Conversion complete".bright_green().bold());
        println!(
            "  {} {}",
            "Output:".bright_cyan(),
            self.output_path.display()
        );
        println!(
            "  {} {}",
            "Files converted:".bright_cyan(),
            report.files_processed.to_string().bright_white().bold()
        );
        println!(
            "  {} {} of {} records",
            "Features written:".bright_cyan(),
            report.features_written.to_string().bright_white().bold(),
            report.records_seen
        );
        if report.geocode_requests > 0 {
            println!(
                "  {} {} ({} unresolved waypoints)",
                "Geocoding requests:".bright_cyan(),
                report.geocode_requests,
                report.unresolved_waypoints
            );
        }
        println!(
            "  {} {}",
            "Output size:".bright_cyan(),
            Self::format_size(self.output_size)
        );
        println!(
            "  {} {}",
            "Processing time:".bright_cyan(),
            HumanDuration(self.processing_time)
        );

        if report.skipped_total() > 0 {
            println!("\n{}", "Skipped records:".bright_yellow());
            for (reason, count) in &report.skipped {
                println!("  {} {}", format!("{}:", reason).bright_yellow(), count);
            }
        }

        if !report.failed_files.is_empty() {
            println!("\n{}", "Files that could not be converted:".bright_red());
            for path in &report.failed_files {
                println!("  {}", path.display());
            }
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // RUST_LOG wins over the -v/-q derived level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("takeout_geojson={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration: defaults, config file, environment, then CLI flags
pub fn load_configuration(args: &Args, places_only: bool) -> Result<ConverterConfig> {
    let config_file = match &args.config_file {
        Some(path) => Some(path.clone()),
        None => ConverterConfig::default_config_path()
            .ok()
            .filter(|path| path.exists()),
    };

    let mut config = ConverterConfig::load_layered(config_file.as_deref())
        .context("Failed to load configuration")?;

    if let Some(key) = &args.api_key {
        config = config.with_api_key(key.clone());
    }
    if let Some(url) = &args.media_base_url {
        config = config.with_media_base_url(url.clone());
    }
    if places_only {
        config = config.with_places_only(true);
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Build the production place resolver for `config`
pub fn build_resolver(config: &ConverterConfig) -> Result<Arc<dyn PlaceResolver>> {
    let geocoder = GoogleGeocoder::new(config).context("Failed to create geocoding client")?;
    Ok(Arc::new(geocoder))
}

/// Fail early with a readable message when the input is missing
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Input path does not exist: {}", path.display());
    }
    Ok(())
}
