//! Instagram story extraction.
//!
//! A story is usable only when `media_metadata.photo_metadata.exif_data`
//! holds exactly two entries: the first with GPS latitude/longitude, the
//! second optionally with `date_time_original`.

use super::RecordOutcome;
use crate::constants::{MEDIA_PATH_MARKER, STORY_EXIF_ENTRIES, STORY_LAYOUTS};
use crate::models::{ExtractedRecord, GeoRecord, SkipReason};
use crate::timestamp::normalize;
use serde_json::Value;
use tracing::{debug, warn};

const EXIF_POINTER: &str = "/media_metadata/photo_metadata/exif_data";

/// Extract a story's position, capture time and media URL
pub fn extract_story(story: &Value, media_base_url: &str) -> RecordOutcome {
    let exif = match story.pointer(EXIF_POINTER).and_then(Value::as_array) {
        Some(exif) if exif.len() == STORY_EXIF_ENTRIES => exif,
        _ => return RecordOutcome::Skipped(SkipReason::NoGpsData),
    };

    let gps = &exif[0];
    let (Some(latitude), Some(longitude)) = (
        gps.get("latitude").and_then(Value::as_f64),
        gps.get("longitude").and_then(Value::as_f64),
    ) else {
        debug!("Story EXIF block has no latitude/longitude");
        return RecordOutcome::Skipped(SkipReason::MissingCoordinates);
    };

    let mut record = GeoRecord::new(longitude, latitude);

    if let Some(captured) = exif[1].get("date_time_original") {
        let Some(text) = captured.as_str() else {
            warn!("Story capture time is not a string: {}", captured);
            return RecordOutcome::Skipped(SkipReason::InvalidTimestamp);
        };
        match normalize(text, STORY_LAYOUTS) {
            Ok(timestamp) => record.timestamp = Some(timestamp),
            Err(e) => {
                warn!("Skipping story: {}", e);
                return RecordOutcome::Skipped(SkipReason::InvalidTimestamp);
            }
        }
    }

    if let Some(uri) = story.get("uri").and_then(Value::as_str) {
        match extract_media_path(uri) {
            Some(path) => record.url = Some(join_media_url(media_base_url, path)),
            None => warn!(
                "Story uri '{}' has no '{}' segment, omitting url",
                uri, MEDIA_PATH_MARKER
            ),
        }
    }

    RecordOutcome::Extracted(ExtractedRecord::Point(record))
}

/// Relative media path after the first `media/` segment
///
/// `media/stories/202108/x.jpg` becomes `stories/202108/x.jpg`.
pub fn extract_media_path(uri: &str) -> Option<&str> {
    uri.split_once(MEDIA_PATH_MARKER).map(|(_, rest)| rest)
}

fn join_media_url(base: &str, path: &str) -> String {
    if base.ends_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_media_path() {
        assert_eq!(
            extract_media_path("media/stories/202108/x.jpg"),
            Some("stories/202108/x.jpg")
        );
        assert_eq!(
            extract_media_path("export/media/stories/y.jpg"),
            Some("stories/y.jpg")
        );
        assert_eq!(extract_media_path("stories/202108/x.jpg"), None);
    }

    #[test]
    fn test_extract_media_path_uses_first_marker() {
        assert_eq!(
            extract_media_path("media/stories/media/z.jpg"),
            Some("stories/media/z.jpg")
        );
    }

    #[test]
    fn test_join_media_url() {
        assert_eq!(
            join_media_url("https://cdn.example.com/", "stories/x.jpg"),
            "https://cdn.example.com/stories/x.jpg"
        );
        assert_eq!(
            join_media_url("https://cdn.example.com", "stories/x.jpg"),
            "https://cdn.example.com/stories/x.jpg"
        );
    }
}
