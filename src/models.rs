//! Core data structures for location-history conversion.
//!
//! Defines the intermediate records produced by extraction, the GeoJSON
//! output types, record-level skip reasons and the per-run conversion report.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Scalar GeoJSON properties keyed by name
pub type PropertyMap = Map<String, Value>;

/// A single located record (story photo or place visit)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeoRecord {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub timestamp: Option<f64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub url: Option<String>,
}

impl GeoRecord {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            ..Default::default()
        }
    }

    /// Flatten into GeoJSON properties, omitting absent optional fields
    pub fn properties(&self) -> PropertyMap {
        let mut properties = PropertyMap::new();
        if let Some(name) = &self.name {
            properties.insert("name".to_string(), Value::from(name.as_str()));
        }
        if let Some(address) = &self.address {
            properties.insert("address".to_string(), Value::from(address.as_str()));
        }
        properties.insert("longitude".to_string(), Value::from(self.longitude));
        properties.insert("latitude".to_string(), Value::from(self.latitude));
        if let Some(timestamp) = self.timestamp {
            properties.insert("timestamp".to_string(), Value::from(timestamp));
        }
        if let Some(url) = &self.url {
            properties.insert("url".to_string(), Value::from(url.as_str()));
        }
        properties
    }
}

/// One vertex of a movement line: `(lon, lat, altitude, timestamp)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub longitude: f64,
    pub latitude: f64,
    pub altitude: f64,
    pub timestamp: f64,
}

impl TrackPoint {
    pub fn to_coordinates(self) -> [f64; 4] {
        [self.longitude, self.latitude, self.altitude, self.timestamp]
    }
}

/// An activity segment resolved into an ordered track
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentRecord {
    /// Start, resolved waypoints, end
    pub points: Vec<TrackPoint>,
    pub activity_type: Option<String>,
}

/// Output of the extraction stage for a record that survived
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedRecord {
    Point(GeoRecord),
    Track(SegmentRecord),
}

/// GeoJSON geometry, always in `(lon, lat, ...)` order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 4]> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub properties: PropertyMap,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Append another collection's features, keeping order
    pub fn extend(&mut self, other: FeatureCollection) {
        self.features.extend(other.features);
    }
}

/// Why a single record was dropped from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Story without a two-entry EXIF block
    NoGpsData,
    MissingCoordinates,
    MissingTimestamp,
    InvalidTimestamp,
    InvalidDuration,
    Unrecognized,
    /// Excluded by the run mode (e.g. segments in places-only mode)
    Filtered,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SkipReason::NoGpsData => "no GPS data",
            SkipReason::MissingCoordinates => "missing coordinates",
            SkipReason::MissingTimestamp => "missing timestamp",
            SkipReason::InvalidTimestamp => "invalid timestamp",
            SkipReason::InvalidDuration => "invalid waypoint duration",
            SkipReason::Unrecognized => "unrecognized record",
            SkipReason::Filtered => "filtered out",
        };
        f.write_str(label)
    }
}

/// Per-run (or per-file) conversion statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Number of input files converted successfully
    pub files_processed: usize,
    /// Number of input files skipped as unreadable or unrecognized
    pub files_failed: usize,
    /// Number of records found in the documents' root arrays
    pub records_seen: usize,
    /// Number of features in the assembled collection
    pub features_written: usize,
    /// Dropped records counted per reason
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Number of place-id lookups sent to the resolver
    pub geocode_requests: usize,
    /// Waypoints left out of their track (not found or no place id)
    pub unresolved_waypoints: usize,
    /// Paths of the files counted in `files_failed`
    pub failed_files: Vec<PathBuf>,
}

impl ConversionReport {
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: ConversionReport) {
        self.files_processed += other.files_processed;
        self.files_failed += other.files_failed;
        self.records_seen += other.records_seen;
        self.features_written += other.features_written;
        self.geocode_requests += other.geocode_requests;
        self.unresolved_waypoints += other.unresolved_waypoints;
        for (reason, count) in other.skipped {
            *self.skipped.entry(reason).or_insert(0) += count;
        }
        self.failed_files.extend(other.failed_files);
    }
}
