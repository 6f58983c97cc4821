//! Document conversion engine.
//!
//! Reads vendor export files, runs every record through classification,
//! extraction and geometry building, and assembles the surviving features
//! into a single `FeatureCollection` together with a [`ConversionReport`].

pub mod discovery;
pub mod writer;

#[cfg(test)]
pub mod tests;

use self::discovery::InputDiscovery;

use crate::assembler::assemble;
use crate::config::ConverterConfig;
use crate::error::{ConverterError, Result};
use crate::extract::{
    DocumentKind, RecordOutcome, SourceRecord, extract_activity_segment, extract_place_visit,
    extract_story,
};
use crate::geocode::PlaceResolver;
use crate::geometry::build_geometry;
use crate::models::{ConversionReport, FeatureCollection, SkipReason};

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, error, info, warn};

/// Features produced by a conversion together with its statistics
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    pub collection: FeatureCollection,
    pub report: ConversionReport,
}

/// Converts Instagram and Google Takeout documents to GeoJSON
pub struct DocumentConverter {
    config: ConverterConfig,
    resolver: Arc<dyn PlaceResolver>,
    show_progress: bool,
}

impl DocumentConverter {
    pub fn new(config: ConverterConfig, resolver: Arc<dyn PlaceResolver>) -> Self {
        Self {
            config,
            resolver,
            show_progress: false,
        }
    }

    /// Show a progress bar during batch conversion
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Convert a single export file
    pub async fn convert_file(&self, path: &Path) -> Result<Conversion> {
        let document = read_document(path).await?;
        let mut conversion = self.convert_document(&document, path).await?;
        conversion.report.files_processed = 1;

        info!(
            "Converted {}: {} features from {} records",
            path.display(),
            conversion.report.features_written,
            conversion.report.records_seen
        );

        Ok(conversion)
    }

    /// Convert an already decoded document; `source` is only used for errors
    pub async fn convert_document(&self, document: &Value, source: &Path) -> Result<Conversion> {
        let kind = DocumentKind::detect(document).ok_or_else(|| ConverterError::UnknownDocument {
            path: source.to_path_buf(),
        })?;
        let records = kind.records(document);
        debug!(
            "Detected {:?} document with {} records in {}",
            kind,
            records.len(),
            source.display()
        );

        let mut report = ConversionReport::default();
        let mut pairs = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            report.records_seen += 1;
            let source_record = SourceRecord::classify(kind, record);

            match self.extract(source_record, &mut report).await? {
                RecordOutcome::Extracted(extracted) => {
                    let (geometry, properties) = build_geometry(&extracted);
                    pairs.push((Some(geometry), Some(properties)));
                }
                RecordOutcome::Skipped(reason) => {
                    debug!(
                        "Skipping {} record {}: {}",
                        source_record.label(),
                        index,
                        reason
                    );
                    report.record_skip(reason);
                    pairs.push((None, None));
                }
            }
        }

        let collection = assemble(pairs);
        report.features_written = collection.len();

        Ok(Conversion { collection, report })
    }

    async fn extract(
        &self,
        record: SourceRecord<'_>,
        report: &mut ConversionReport,
    ) -> Result<RecordOutcome> {
        match record {
            SourceRecord::Story(story) => Ok(extract_story(story, &self.config.media_base_url)),
            SourceRecord::PlaceVisit(visit) => Ok(extract_place_visit(visit)),
            SourceRecord::ActivitySegment(_) if self.config.places_only => {
                Ok(RecordOutcome::Skipped(SkipReason::Filtered))
            }
            SourceRecord::ActivitySegment(segment) => {
                extract_activity_segment(
                    segment,
                    &*self.resolver,
                    self.config.geocode_concurrency,
                    report,
                )
                .await
            }
            SourceRecord::Unrecognized => Ok(RecordOutcome::Skipped(SkipReason::Unrecognized)),
        }
    }

    /// Convert every export file found under `input_dir` into one collection.
    ///
    /// Files are processed in discovery order so the merged output is
    /// deterministic. A file that cannot be read, decoded or recognized is
    /// logged, counted as failed and skipped; any other error aborts the run.
    pub async fn convert_batch(&self, input_dir: &Path) -> Result<Conversion> {
        let files = InputDiscovery::new(input_dir.to_path_buf()).discover_json_files()?;
        info!(
            "Found {} input files under {}",
            files.len(),
            input_dir.display()
        );

        let pb = self.progress_bar(files.len() as u64);
        let mut merged = Conversion::default();

        for path in &files {
            if let Some(file_name) = path.file_name() {
                pb.set_message(format!("Converting: {}", file_name.to_string_lossy()));
            }

            match self.convert_file(path).await {
                Ok(conversion) => {
                    merged.collection.extend(conversion.collection);
                    merged.report.merge(conversion.report);
                }
                Err(e) if e.is_file_scoped() => {
                    error!("Failed to convert {}: {}", path.display(), e);
                    merged.report.files_failed += 1;
                    merged.report.failed_files.push(path.clone());
                }
                Err(e) => {
                    pb.abandon_with_message("Conversion aborted");
                    return Err(e);
                }
            }
            pb.inc(1);
        }

        pb.finish_with_message("Conversion complete");

        if merged.report.files_failed > 0 {
            warn!(
                "{} of {} files could not be converted",
                merged.report.files_failed,
                files.len()
            );
        }

        Ok(merged)
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} files {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Read and decode one JSON export file
pub async fn read_document(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Err(ConverterError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).await?;
    serde_json::from_str(&content).map_err(|source| ConverterError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}
