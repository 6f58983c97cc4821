//! In-memory resolver for unit tests

use super::{Location, PlaceResolver};
use crate::error::{ConverterError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct StaticResolver {
    places: HashMap<String, Location>,
    failures: HashSet<String>,
    requests: AtomicUsize,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, place_id: &str, latitude: f64, longitude: f64) -> Self {
        self.places.insert(
            place_id.to_string(),
            Location {
                latitude,
                longitude,
            },
        );
        self
    }

    /// Make lookups of `place_id` fail as a service error
    pub fn with_failure(mut self, place_id: &str) -> Self {
        self.failures.insert(place_id.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlaceResolver for StaticResolver {
    async fn resolve(&self, place_id: &str) -> Result<Option<Location>> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if self.failures.contains(place_id) {
            return Err(ConverterError::remote_service(place_id, "REQUEST_DENIED"));
        }
        Ok(self.places.get(place_id).copied())
    }
}
