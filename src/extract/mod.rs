//! Geo-record extraction.
//!
//! Decoded JSON records are classified structurally exactly once into a
//! [`SourceRecord`], then handed to the variant's extractor. Extraction never
//! fails a batch for one bad record: it yields a [`RecordOutcome`] that is
//! either an extracted record or a [`SkipReason`]. Only run-level failures
//! (geocoding service errors) surface as `Err`.

pub mod story;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use story::{extract_media_path, extract_story};
pub use timeline::{extract_activity_segment, extract_place_visit};

use crate::constants::{
    ACTIVITY_SEGMENT_KEY, E7_SCALE, PLACE_VISIT_KEY, STORIES_ROOT_KEY, TIMELINE_ROOT_KEY,
};
use crate::models::{ExtractedRecord, SkipReason};
use serde_json::Value;

/// Which vendor export a whole document comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Instagram export with a top-level `ig_stories` array
    Stories,
    /// Google Takeout semantic history with a top-level `timelineObjects` array
    Timeline,
}

impl DocumentKind {
    /// Detect the document kind from its top-level key
    pub fn detect(document: &Value) -> Option<Self> {
        if document.get(STORIES_ROOT_KEY).is_some_and(Value::is_array) {
            Some(DocumentKind::Stories)
        } else if document.get(TIMELINE_ROOT_KEY).is_some_and(Value::is_array) {
            Some(DocumentKind::Timeline)
        } else {
            None
        }
    }

    pub fn root_key(&self) -> &'static str {
        match self {
            DocumentKind::Stories => STORIES_ROOT_KEY,
            DocumentKind::Timeline => TIMELINE_ROOT_KEY,
        }
    }

    /// Records of the document, empty if the root array is missing
    pub fn records<'a>(&self, document: &'a Value) -> &'a [Value] {
        document
            .get(self.root_key())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// A record after structural classification, borrowing its payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceRecord<'a> {
    Story(&'a Value),
    PlaceVisit(&'a Value),
    ActivitySegment(&'a Value),
    Unrecognized,
}

impl<'a> SourceRecord<'a> {
    /// Classify one element of a document's record array
    pub fn classify(kind: DocumentKind, record: &'a Value) -> Self {
        match kind {
            DocumentKind::Stories if record.is_object() => SourceRecord::Story(record),
            DocumentKind::Stories => SourceRecord::Unrecognized,
            DocumentKind::Timeline => {
                if let Some(segment) = record.get(ACTIVITY_SEGMENT_KEY) {
                    SourceRecord::ActivitySegment(segment)
                } else if let Some(visit) = record.get(PLACE_VISIT_KEY) {
                    SourceRecord::PlaceVisit(visit)
                } else {
                    SourceRecord::Unrecognized
                }
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SourceRecord::Story(_) => "story",
            SourceRecord::PlaceVisit(_) => "place visit",
            SourceRecord::ActivitySegment(_) => "activity segment",
            SourceRecord::Unrecognized => "unrecognized",
        }
    }
}

/// What extraction produced for one record
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    Extracted(ExtractedRecord),
    Skipped(SkipReason),
}

/// Read an E7 fixed-point coordinate pair (`latitudeE7`, `longitudeE7`)
///
/// Returns `(longitude, latitude)` in degrees.
pub(crate) fn e7_position(location: &Value) -> Option<(f64, f64)> {
    let latitude = location.get("latitudeE7").and_then(Value::as_f64)?;
    let longitude = location.get("longitudeE7").and_then(Value::as_f64)?;
    Some((longitude / E7_SCALE, latitude / E7_SCALE))
}

pub(crate) fn optional_string(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
