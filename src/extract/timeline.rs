//! Google Takeout timeline extraction.
//!
//! Handles the two timeline object shapes: `placeVisit` (a single named
//! location) and `activitySegment` (movement from a start to an end location,
//! optionally through a waypoint path of place ids).

use super::{RecordOutcome, e7_position, optional_string};
use crate::constants::{DEFAULT_ALTITUDE, TIMELINE_LAYOUTS};
use crate::error::{ConverterError, Result};
use crate::geocode::{PlaceResolver, resolve_all};
use crate::models::{
    ConversionReport, ExtractedRecord, GeoRecord, SegmentRecord, SkipReason, TrackPoint,
};
use crate::timestamp::normalize;
use serde_json::Value;
use tracing::{debug, warn};

/// Extract a place visit into a point record
pub fn extract_place_visit(visit: &Value) -> RecordOutcome {
    let Some(location) = visit.get("location") else {
        return RecordOutcome::Skipped(SkipReason::MissingCoordinates);
    };
    let Some((longitude, latitude)) = e7_position(location) else {
        debug!("Place visit without E7 coordinates");
        return RecordOutcome::Skipped(SkipReason::MissingCoordinates);
    };

    let mut record = GeoRecord::new(longitude, latitude);
    record.name = optional_string(location, "name");
    record.address = optional_string(location, "address");

    if let Some(start) = visit.pointer("/duration/startTimestamp") {
        match parse_timeline_timestamp(start) {
            Ok(timestamp) => record.timestamp = Some(timestamp),
            Err(reason) => return RecordOutcome::Skipped(reason),
        }
    }

    RecordOutcome::Extracted(ExtractedRecord::Point(record))
}

/// One `waypointPath.roadSegment` entry
#[derive(Debug, Clone, PartialEq)]
struct RoadSegment {
    place_id: Option<String>,
    duration_secs: u64,
}

/// Extract an activity segment into an ordered track.
///
/// Waypoint place ids are resolved through `resolver`; a place that cannot
/// be found drops only that waypoint. The waypoint clock starts at the
/// segment start and advances by every waypoint's duration in path order.
/// Geocoding request counts are added to `report`.
pub async fn extract_activity_segment<R>(
    segment: &Value,
    resolver: &R,
    concurrency: usize,
    report: &mut ConversionReport,
) -> Result<RecordOutcome>
where
    R: PlaceResolver + ?Sized,
{
    let (Some(start), Some(end)) = (
        segment.get("startLocation").and_then(e7_position),
        segment.get("endLocation").and_then(e7_position),
    ) else {
        debug!("Activity segment without start/end coordinates");
        return Ok(RecordOutcome::Skipped(SkipReason::MissingCoordinates));
    };

    let (Some(start_text), Some(end_text)) = (
        segment.pointer("/duration/startTimestamp"),
        segment.pointer("/duration/endTimestamp"),
    ) else {
        debug!("Activity segment without start/end timestamps");
        return Ok(RecordOutcome::Skipped(SkipReason::MissingTimestamp));
    };

    let start_timestamp = match parse_timeline_timestamp(start_text) {
        Ok(timestamp) => timestamp,
        Err(reason) => return Ok(RecordOutcome::Skipped(reason)),
    };
    let end_timestamp = match parse_timeline_timestamp(end_text) {
        Ok(timestamp) => timestamp,
        Err(reason) => return Ok(RecordOutcome::Skipped(reason)),
    };

    let road_segments = match parse_road_segments(segment) {
        Ok(road_segments) => road_segments,
        Err(reason) => return Ok(RecordOutcome::Skipped(reason)),
    };

    let mut points = Vec::with_capacity(road_segments.len() + 2);
    points.push(TrackPoint {
        longitude: start.0,
        latitude: start.1,
        altitude: DEFAULT_ALTITUDE,
        timestamp: start_timestamp,
    });

    let waypoints = resolve_waypoints(
        &road_segments,
        start_timestamp,
        resolver,
        concurrency,
        report,
    )
    .await?;
    points.extend(waypoints);

    points.push(TrackPoint {
        longitude: end.0,
        latitude: end.1,
        altitude: DEFAULT_ALTITUDE,
        timestamp: end_timestamp,
    });

    Ok(RecordOutcome::Extracted(ExtractedRecord::Track(SegmentRecord {
        points,
        activity_type: optional_string(segment, "activityType"),
    })))
}

async fn resolve_waypoints<R>(
    road_segments: &[RoadSegment],
    start_timestamp: f64,
    resolver: &R,
    concurrency: usize,
    report: &mut ConversionReport,
) -> Result<Vec<TrackPoint>>
where
    R: PlaceResolver + ?Sized,
{
    let place_ids: Vec<String> = road_segments
        .iter()
        .filter_map(|road_segment| road_segment.place_id.clone())
        .collect();

    let batch = resolve_all(resolver, &place_ids, concurrency).await?;
    report.geocode_requests += batch.requests;

    let mut locations = batch.locations.into_iter();
    let mut clock = start_timestamp;
    let mut waypoints = Vec::new();

    for road_segment in road_segments {
        clock += road_segment.duration_secs as f64;

        let Some(place_id) = &road_segment.place_id else {
            debug!("Road segment without place id, skipping waypoint");
            report.unresolved_waypoints += 1;
            continue;
        };

        match locations.next().flatten() {
            Some(location) => waypoints.push(TrackPoint {
                longitude: location.longitude,
                latitude: location.latitude,
                altitude: DEFAULT_ALTITUDE,
                timestamp: clock,
            }),
            None => {
                let unresolved = ConverterError::UnresolvedPlace {
                    place_id: place_id.clone(),
                };
                warn!("{}, skipping waypoint", unresolved);
                report.unresolved_waypoints += 1;
            }
        }
    }

    Ok(waypoints)
}

fn parse_road_segments(segment: &Value) -> std::result::Result<Vec<RoadSegment>, SkipReason> {
    let Some(entries) = segment
        .pointer("/waypointPath/roadSegment")
        .and_then(Value::as_array)
    else {
        return Ok(Vec::new());
    };

    entries
        .iter()
        .map(|entry| {
            let duration = entry.get("duration").and_then(Value::as_str);
            let Some(duration_secs) = duration.and_then(parse_duration_secs) else {
                warn!("Invalid road segment duration: {:?}", entry.get("duration"));
                return Err(SkipReason::InvalidDuration);
            };
            Ok(RoadSegment {
                place_id: optional_string(entry, "placeId"),
                duration_secs,
            })
        })
        .collect()
}

/// Parse a Takeout duration such as `"23s"` into whole seconds
pub(crate) fn parse_duration_secs(text: &str) -> Option<u64> {
    text.strip_suffix('s')?.parse().ok()
}

fn parse_timeline_timestamp(value: &Value) -> std::result::Result<f64, SkipReason> {
    let Some(text) = value.as_str() else {
        warn!("Timeline timestamp is not a string: {}", value);
        return Err(SkipReason::InvalidTimestamp);
    };
    normalize(text, TIMELINE_LAYOUTS).map_err(|e| {
        warn!("Skipping timeline object: {}", e);
        SkipReason::InvalidTimestamp
    })
}
