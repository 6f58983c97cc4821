//! Application constants for the Takeout to GeoJSON converter
//!
//! Vendor field names, fixed-point scales, timestamp layouts and default
//! endpoints used throughout the crate.

// =============================================================================
// Coordinates
// =============================================================================

/// Divisor for fixed-point "E7" coordinates (degrees × 10^7)
pub const E7_SCALE: f64 = 10_000_000.0;

/// Altitude used when the source carries none
pub const DEFAULT_ALTITUDE: f64 = 0.0;

// =============================================================================
// Timestamp Layouts
// =============================================================================

/// A chrono layout plus whether it carries a fractional-seconds component.
///
/// chrono's `%.f` also matches an absent fraction, so fractional layouts
/// additionally require a literal `.` in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampLayout {
    pub pattern: &'static str,
    pub fractional: bool,
}

/// `2021-08-15T14:30:00.500000Z`
pub const ISO_FRACTIONAL: TimestampLayout = TimestampLayout {
    pattern: "%Y-%m-%dT%H:%M:%S%.fZ",
    fractional: true,
};

/// `2021-08-15T14:30:00Z`
pub const ISO_SECONDS: TimestampLayout = TimestampLayout {
    pattern: "%Y-%m-%dT%H:%M:%SZ",
    fractional: false,
};

/// `2021:08:15 14:30:00` (EXIF DateTimeOriginal)
pub const EXIF_DATETIME: TimestampLayout = TimestampLayout {
    pattern: "%Y:%m:%d %H:%M:%S",
    fractional: false,
};

/// `20210815T143000.500000Z`
pub const COMPACT_FRACTIONAL: TimestampLayout = TimestampLayout {
    pattern: "%Y%m%dT%H%M%S%.fZ",
    fractional: true,
};

/// Layouts accepted for Instagram story capture times, in priority order
pub const STORY_LAYOUTS: &[TimestampLayout] = &[
    ISO_FRACTIONAL,
    ISO_SECONDS,
    EXIF_DATETIME,
    COMPACT_FRACTIONAL,
];

/// Layouts accepted for Takeout timeline durations, in priority order
pub const TIMELINE_LAYOUTS: &[TimestampLayout] = &[ISO_FRACTIONAL, ISO_SECONDS];

// =============================================================================
// Instagram Stories
// =============================================================================

pub const STORIES_ROOT_KEY: &str = "ig_stories";

/// Path segment preceding the relative media path in a story `uri`
pub const MEDIA_PATH_MARKER: &str = "media/";

/// Base URL that relative story media paths are joined onto
pub const DEFAULT_MEDIA_BASE_URL: &str = "https://instagram-data-jose.s3.amazonaws.com/";

/// Number of EXIF entries a story needs to carry usable GPS data
pub const STORY_EXIF_ENTRIES: usize = 2;

// =============================================================================
// Google Takeout Timeline
// =============================================================================

pub const TIMELINE_ROOT_KEY: &str = "timelineObjects";
pub const PLACE_VISIT_KEY: &str = "placeVisit";
pub const ACTIVITY_SEGMENT_KEY: &str = "activitySegment";

// =============================================================================
// Geocoding
// =============================================================================

pub const DEFAULT_GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Environment variable holding the Google Maps API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

pub const DEFAULT_GEOCODE_TIMEOUT_SECS: u64 = 10;

/// Sequential lookups by default; the service is rate limited
pub const DEFAULT_GEOCODE_CONCURRENCY: usize = 1;

// =============================================================================
// Configuration Files
// =============================================================================

/// Directory under the platform config dir holding `config.toml`
pub const CONFIG_DIR_NAME: &str = "takeout-geojson";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Only files with this extension are picked up in batch mode
pub const INPUT_FILE_EXTENSION: &str = "json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_lists_are_distinct() {
        assert_eq!(STORY_LAYOUTS.len(), 4);
        assert_eq!(TIMELINE_LAYOUTS.len(), 2);
        assert_eq!(&STORY_LAYOUTS[..2], TIMELINE_LAYOUTS);
        assert!(!TIMELINE_LAYOUTS.contains(&EXIF_DATETIME));
        assert!(!TIMELINE_LAYOUTS.contains(&COMPACT_FRACTIONAL));
    }

    #[test]
    fn test_e7_scale_is_ten_million() {
        assert_eq!(E7_SCALE, 1e7);
        assert_eq!(407_128_000.0 / E7_SCALE, 40.7128);
    }
}
