//! Command-line argument definitions
//!
//! This module defines the CLI interface using the clap derive API. Global
//! flags are accepted before or after the subcommand.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert location-history exports to GeoJSON
///
/// Reads Instagram story exports (`ig_stories`) and Google Takeout semantic
/// location history (`timelineObjects`) and writes a single GeoJSON
/// FeatureCollection for map rendering.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "takeout-geojson",
    version,
    about = "Convert Google Takeout timelines and Instagram stories to GeoJSON",
    long_about = "Converts Instagram story metadata and Google Takeout semantic location history \
                  into GeoJSON FeatureCollections. Stories and place visits become Points; \
                  activity segments become LineStrings whose waypoints are resolved through \
                  the Google Geocoding API."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// ~/.config/takeout-geojson/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Google Maps API key used to resolve waypoint place ids
    #[arg(
        long = "api-key",
        value_name = "KEY",
        global = true,
        help = "Google Maps API key (defaults to GOOGLE_MAPS_API_KEY)"
    )]
    pub api_key: Option<String>,

    /// Base URL that story media paths are joined onto
    #[arg(
        long = "media-base-url",
        value_name = "URL",
        global = true,
        help = "Base URL for story media links"
    )]
    pub media_base_url: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a single export file to GeoJSON
    Convert(ConvertArgs),
    /// Convert every export in a directory of subfolders into one GeoJSON file
    ConvertBatch(ConvertBatchArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Instagram or Google Takeout JSON export
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination GeoJSON file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Keep only place visits
    #[arg(long = "places-only", help = "Keep only place visits (heatmap mode)")]
    pub places_only: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ConvertBatchArgs {
    /// Directory whose immediate subfolders hold the JSON exports
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Destination GeoJSON file for the merged collection
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Keep only place visits
    #[arg(long = "places-only", help = "Keep only place visits (heatmap mode)")]
    pub places_only: bool,
}

impl Args {
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars and the summary (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let args = Args::try_parse_from([
            "takeout-geojson",
            "convert",
            "2021_AUGUST.json",
            "out.geojson",
        ])
        .unwrap();

        match args.command {
            Some(Commands::Convert(convert)) => {
                assert_eq!(convert.input, PathBuf::from("2021_AUGUST.json"));
                assert_eq!(convert.output, PathBuf::from("out.geojson"));
                assert!(!convert.places_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_convert_batch_with_global_flags() {
        let args = Args::try_parse_from([
            "takeout-geojson",
            "convert-batch",
            "exports",
            "merged.geojson",
            "--places-only",
            "--api-key",
            "secret",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.api_key.as_deref(), Some("secret"));
        assert_eq!(args.verbose, 2);
        match args.command {
            Some(Commands::ConvertBatch(batch)) => {
                assert_eq!(batch.input_dir, PathBuf::from("exports"));
                assert!(batch.places_only);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(Args::try_parse_from(["takeout-geojson", "convert", "in.json"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(
            Args::try_parse_from(["takeout-geojson", "-q", "-v", "convert", "a", "b"]).is_err()
        );
    }

    #[test]
    fn test_log_level() {
        let mut args = Args::try_parse_from(["takeout-geojson"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");
        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
        assert!(!args.show_progress());
    }
}
