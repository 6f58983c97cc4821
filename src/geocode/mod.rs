//! Place-id resolution for activity segment waypoints.
//!
//! The core only sees the [`PlaceResolver`] seam: a place id goes in, a
//! location (or "not found") comes out. Transport, credentials and rate
//! limits belong to the implementation.

pub mod google;

#[cfg(test)]
pub mod testing;

pub use google::GoogleGeocoder;

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A resolved place position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Resolves opaque place identifiers to coordinates.
///
/// `Ok(None)` means the service knows nothing about the id and the caller
/// should skip it. `Err` is a transport or authentication failure.
#[async_trait]
pub trait PlaceResolver: Send + Sync {
    async fn resolve(&self, place_id: &str) -> Result<Option<Location>>;
}

/// Result of resolving every waypoint of one segment
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeocodeBatch {
    /// One entry per requested place id, in request order
    pub locations: Vec<Option<Location>>,
    pub requests: usize,
}

/// Resolve `place_ids` with at most `concurrency` requests in flight.
///
/// Results are returned in the order of `place_ids` whatever order the
/// responses arrive in. The first service error aborts the batch.
pub async fn resolve_all<R>(
    resolver: &R,
    place_ids: &[String],
    concurrency: usize,
) -> Result<GeocodeBatch>
where
    R: PlaceResolver + ?Sized,
{
    if place_ids.is_empty() {
        return Ok(GeocodeBatch::default());
    }

    debug!(
        "Resolving {} place ids (concurrency {})",
        place_ids.len(),
        concurrency
    );

    let locations: Vec<Option<Location>> = stream::iter(place_ids)
        .map(|place_id| resolver.resolve(place_id))
        .buffered(concurrency.max(1))
        .try_collect()
        .await?;

    Ok(GeocodeBatch {
        requests: locations.len(),
        locations,
    })
}
