//! Convert and convert-batch command implementations

use super::shared::{
    RunSummary, build_resolver, ensure_exists, load_configuration, setup_logging,
};
use crate::cli::args::{Args, ConvertArgs, ConvertBatchArgs};
use crate::processor::writer::GeoJsonWriter;
use crate::processor::{Conversion, DocumentConverter};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert one export file
pub async fn run_convert(args: &Args, convert_args: ConvertArgs) -> Result<RunSummary> {
    let start_time = Instant::now();
    setup_logging(args);
    debug!("Command line arguments: {:?}", convert_args);

    ensure_exists(&convert_args.input)?;
    let converter = create_converter(args, convert_args.places_only)?;

    info!("Converting {}", convert_args.input.display());
    let conversion = converter
        .convert_file(&convert_args.input)
        .await
        .with_context(|| format!("Failed to convert {}", convert_args.input.display()))?;

    finish(args, conversion, &convert_args.output, start_time)
}

/// Convert every export under a directory of subfolders into one file
pub async fn run_convert_batch(args: &Args, batch_args: ConvertBatchArgs) -> Result<RunSummary> {
    let start_time = Instant::now();
    setup_logging(args);
    debug!("Command line arguments: {:?}", batch_args);

    ensure_exists(&batch_args.input_dir)?;
    let converter = create_converter(args, batch_args.places_only)?;

    info!("Converting exports under {}", batch_args.input_dir.display());
    let conversion = converter
        .convert_batch(&batch_args.input_dir)
        .await
        .with_context(|| {
            format!(
                "Batch conversion of {} failed",
                batch_args.input_dir.display()
            )
        })?;

    finish(args, conversion, &batch_args.output, start_time)
}

fn create_converter(args: &Args, places_only: bool) -> Result<DocumentConverter> {
    let config = load_configuration(args, places_only)?;
    debug!(
        "Loaded configuration: media base {}, geocoding concurrency {}, places only {}",
        config.media_base_url, config.geocode_concurrency, config.places_only
    );

    let resolver = build_resolver(&config)?;
    Ok(DocumentConverter::new(config, resolver).with_progress(args.show_progress()))
}

fn finish(
    args: &Args,
    conversion: Conversion,
    output: &Path,
    start_time: Instant,
) -> Result<RunSummary> {
    let writer = GeoJsonWriter::new(output.to_path_buf());
    let output_size = writer
        .write(&conversion.collection)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let summary = RunSummary {
        report: conversion.report,
        output_path: output.to_path_buf(),
        output_size,
        processing_time: start_time.elapsed(),
    };

    if args.show_progress() {
        summary.print();
    }

    Ok(summary)
}
