//! Geometry building.
//!
//! Point records become GeoJSON `Point`s; activity segment tracks become
//! `LineString`s of `(lon, lat, altitude, timestamp)` vertices. A track with
//! fewer than two vertices is emitted unchanged.

use crate::models::{ExtractedRecord, Geometry, PropertyMap};
use serde_json::Value;

/// Build the geometry and properties for an extracted record
pub fn build_geometry(record: &ExtractedRecord) -> (Geometry, PropertyMap) {
    match record {
        ExtractedRecord::Point(point) => (
            Geometry::Point {
                coordinates: [point.longitude, point.latitude],
            },
            point.properties(),
        ),
        ExtractedRecord::Track(track) => {
            let coordinates = track
                .points
                .iter()
                .map(|point| point.to_coordinates())
                .collect();

            let mut properties = PropertyMap::new();
            if let Some(activity_type) = &track.activity_type {
                properties.insert(
                    "activity_type".to_string(),
                    Value::from(activity_type.as_str()),
                );
            }

            (Geometry::LineString { coordinates }, properties)
        }
    }
}
