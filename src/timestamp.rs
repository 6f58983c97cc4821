//! Timestamp normalization.
//!
//! Vendor exports spell instants in several textual layouts. Each layout
//! list is tried in order and the first match wins; every layout is read as
//! UTC wall-clock time and converted to POSIX seconds as an `f64`.

use crate::constants::TimestampLayout;
use crate::error::{ConverterError, Result};
use chrono::NaiveDateTime;
use tracing::trace;

/// Parse `text` against `layouts` and return seconds since the Unix epoch.
///
/// Sub-second precision is kept when the matched layout carries a fraction.
/// A string matching none of the layouts is a [`ConverterError::Format`];
/// there is no numeric fallback.
pub fn normalize(text: &str, layouts: &[TimestampLayout]) -> Result<f64> {
    for layout in layouts {
        if layout.fractional && !text.contains('.') {
            continue;
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(text, layout.pattern) {
            trace!("Timestamp '{}' matched layout '{}'", text, layout.pattern);
            return Ok(to_epoch_seconds(naive));
        }
    }

    Err(ConverterError::Format {
        input: text.to_string(),
    })
}

fn to_epoch_seconds(naive: NaiveDateTime) -> f64 {
    let utc = naive.and_utc();
    utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1_000_000_000.0
}
