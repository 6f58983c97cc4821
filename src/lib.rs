//! Takeout GeoJSON Library
//!
//! Converts personal location-history exports into GeoJSON
//! FeatureCollections for map rendering.
//!
//! This library provides tools for:
//! - Reading Instagram story metadata (`ig_stories`) and Google Takeout
//!   semantic location history (`timelineObjects`)
//! - Normalizing the vendors' timestamp layouts to Unix epoch seconds
//! - Resolving activity segment waypoints through a pluggable place resolver
//! - Building Point and LineString features and writing one FeatureCollection

pub mod assembler;
pub mod config;
pub mod constants;
pub mod error;
pub mod extract;
pub mod geocode;
pub mod geometry;
pub mod models;
pub mod processor;
pub mod timestamp;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use assembler::assemble;
pub use config::ConverterConfig;
pub use error::{ConverterError, Result};
pub use extract::{DocumentKind, RecordOutcome, SourceRecord};
pub use geocode::{GoogleGeocoder, Location, PlaceResolver};
pub use geometry::build_geometry;
pub use models::{
    ConversionReport, ExtractedRecord, Feature, FeatureCollection, GeoRecord, Geometry,
    PropertyMap, SegmentRecord, SkipReason, TrackPoint,
};
pub use processor::{Conversion, DocumentConverter};
pub use timestamp::normalize;
