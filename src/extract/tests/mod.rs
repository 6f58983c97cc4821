//! Tests for geo-record extraction
//!
//! Fixtures mirror the shapes found in real Instagram and Google Takeout
//! exports, trimmed to the fields extraction looks at.

pub mod classification_tests;

use serde_json::{Value, json};

/// Story with a two-entry EXIF block and optional capture time
pub fn story_fixture(date_time_original: Option<&str>) -> Value {
    let mut capture = json!({"scene_capture_type": "standard"});
    if let Some(text) = date_time_original {
        capture["date_time_original"] = json!(text);
    }

    json!({
        "uri": "media/stories/202108/232972524_784218242254668_n.jpg",
        "creation_timestamp": 1629037800,
        "media_metadata": {
            "photo_metadata": {
                "exif_data": [
                    {"latitude": 40.7484, "longitude": -73.9857},
                    capture
                ]
            }
        },
        "title": ""
    })
}

pub fn place_visit_fixture(latitude_e7: i64, longitude_e7: i64) -> Value {
    json!({
        "location": {
            "latitudeE7": latitude_e7,
            "longitudeE7": longitude_e7,
            "placeId": "ChIJaXQRs6lZwokRY6EFpJnhNNE",
            "address": "20 W 34th St, New York, NY 10001, USA",
            "name": "Empire State Building"
        },
        "duration": {
            "startTimestamp": "2021-08-15T14:30:00.500Z",
            "endTimestamp": "2021-08-15T16:00:00Z"
        }
    })
}

pub fn activity_segment_fixture(road_segments: Value) -> Value {
    json!({
        "startLocation": {"latitudeE7": 407484000, "longitudeE7": -739857000},
        "endLocation": {"latitudeE7": 407128000, "longitudeE7": -740060000},
        "duration": {
            "startTimestamp": "2021-08-15T14:30:00Z",
            "endTimestamp": "2021-08-15T14:45:00.000Z"
        },
        "distance": 4102,
        "activityType": "WALKING",
        "waypointPath": {
            "waypoints": [],
            "roadSegment": road_segments
        }
    })
}
