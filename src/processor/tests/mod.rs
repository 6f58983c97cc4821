//! Integration tests for the processor module
//!
//! Runs whole documents through the conversion pipeline using temporary
//! export files and an in-memory place resolver.

pub mod batch_processing;

use crate::config::ConverterConfig;
use crate::geocode::PlaceResolver;
use crate::geocode::testing::StaticResolver;
use crate::processor::DocumentConverter;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub fn converter_with(resolver: StaticResolver) -> DocumentConverter {
    let resolver: Arc<dyn PlaceResolver> = Arc::new(resolver);
    DocumentConverter::new(ConverterConfig::default(), resolver)
}

pub fn write_document(dir: &Path, name: &str, document: &Value) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, serde_json::to_string_pretty(document).unwrap()).unwrap();
    path
}

pub fn place_visit(name: &str, lat_e7: i64, lon_e7: i64) -> Value {
    json!({
        "placeVisit": {
            "location": {
                "latitudeE7": lat_e7,
                "longitudeE7": lon_e7,
                "name": name
            },
            "duration": {"startTimestamp": "2021-08-15T14:30:00Z"}
        }
    })
}

pub fn activity_segment(road_segments: Value) -> Value {
    json!({
        "activitySegment": {
            "startLocation": {"latitudeE7": 407484000, "longitudeE7": -739857000},
            "endLocation": {"latitudeE7": 407128000, "longitudeE7": -740060000},
            "duration": {
                "startTimestamp": "2021-08-15T14:30:00Z",
                "endTimestamp": "2021-08-15T14:45:00Z"
            },
            "activityType": "WALKING",
            "waypointPath": {"roadSegment": road_segments}
        }
    })
}

pub fn story(uri: &str, latitude: f64, longitude: f64) -> Value {
    json!({
        "uri": uri,
        "media_metadata": {
            "photo_metadata": {
                "exif_data": [
                    {"latitude": latitude, "longitude": longitude},
                    {"date_time_original": "2021:08:15 14:30:00"}
                ]
            }
        }
    })
}
