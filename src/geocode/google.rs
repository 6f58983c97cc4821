//! Google Geocoding API client.
//!
//! Resolves a place id with `GET <endpoint>?place_id=<id>&key=<key>` and
//! reads the first result's `geometry.location`.

use super::{Location, PlaceResolver};
use crate::config::ConverterConfig;
use crate::error::{ConverterError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: ResultGeometry,
}

#[derive(Debug, Deserialize)]
struct ResultGeometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GoogleGeocoder {
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.geocode_timeout())
            .build()
            .map_err(|e| {
                ConverterError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.geocode_endpoint.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl PlaceResolver for GoogleGeocoder {
    async fn resolve(&self, place_id: &str) -> Result<Option<Location>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ConverterError::configuration(
                "Resolving waypoints requires a Google Maps API key (--api-key or GOOGLE_MAPS_API_KEY)",
            )
        })?;

        debug!("Geocoding place id {}", place_id);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("place_id", place_id), ("key", api_key)])
            .send()
            .await
            .map_err(|e| ConverterError::remote_service(place_id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ConverterError::remote_service(
                place_id,
                format!("HTTP {}", status),
            ));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| ConverterError::remote_service(place_id, e.to_string()))?;

        interpret_response(place_id, body)
    }
}

fn interpret_response(place_id: &str, response: GeocodeResponse) -> Result<Option<Location>> {
    match response.status.as_str() {
        "OK" => Ok(response.results.into_iter().next().map(|result| Location {
            latitude: result.geometry.location.lat,
            longitude: result.geometry.location.lng,
        })),
        "ZERO_RESULTS" | "NOT_FOUND" => {
            debug!("No geocoding result for place id {}", place_id);
            Ok(None)
        }
        status => {
            let reason = match response.error_message {
                Some(message) => format!("{}: {}", status, message),
                None => status.to_string(),
            };
            warn!("Geocoding failed for {}: {}", place_id, reason);
            Err(ConverterError::remote_service(place_id, reason))
        }
    }
}
