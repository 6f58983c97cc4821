//! Configuration management and validation.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then the environment, then command-line overrides applied by the CLI.

use crate::constants::{
    API_KEY_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_GEOCODE_CONCURRENCY,
    DEFAULT_GEOCODE_ENDPOINT, DEFAULT_GEOCODE_TIMEOUT_SECS, DEFAULT_MEDIA_BASE_URL,
};
use crate::error::{ConverterError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Global configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Base URL that relative story media paths are joined onto
    pub media_base_url: String,

    /// Geocoding endpoint used to resolve waypoint place ids
    pub geocode_endpoint: String,

    /// Google Maps API key; only needed when activity segments carry waypoints
    pub api_key: Option<String>,

    /// Per-request timeout for geocoding calls
    pub geocode_timeout_secs: u64,

    /// Maximum in-flight geocoding requests per segment
    pub geocode_concurrency: usize,

    /// Keep only place visits (heatmap mode)
    pub places_only: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            geocode_endpoint: DEFAULT_GEOCODE_ENDPOINT.to_string(),
            api_key: None,
            geocode_timeout_secs: DEFAULT_GEOCODE_TIMEOUT_SECS,
            geocode_concurrency: DEFAULT_GEOCODE_CONCURRENCY,
            places_only: false,
        }
    }
}

impl ConverterConfig {
    /// Default config file location, e.g. `~/.config/takeout-geojson/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConverterError::configuration("Could not determine user config directory")
        })?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load a configuration from a TOML file; missing keys take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConverterError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ConverterError::configuration(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Defaults, then `config_file` if given, then environment variables
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                debug!("Using API key from {}", API_KEY_ENV);
                self.api_key = Some(key);
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.media_base_url.trim().is_empty() {
            return Err(ConverterError::configuration(
                "media_base_url must not be empty",
            ));
        }
        if self.geocode_endpoint.trim().is_empty() {
            return Err(ConverterError::configuration(
                "geocode_endpoint must not be empty",
            ));
        }
        if self.geocode_timeout_secs == 0 {
            return Err(ConverterError::configuration(
                "geocode_timeout_secs must be greater than zero",
            ));
        }
        if self.geocode_concurrency == 0 {
            return Err(ConverterError::configuration(
                "geocode_concurrency must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn geocode_timeout(&self) -> Duration {
        Duration::from_secs(self.geocode_timeout_secs)
    }

    pub fn with_media_base_url(mut self, url: impl Into<String>) -> Self {
        self.media_base_url = url.into();
        self
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_geocode_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.geocode_endpoint = endpoint.into();
        self
    }

    pub fn with_geocode_timeout_secs(mut self, secs: u64) -> Self {
        self.geocode_timeout_secs = secs;
        self
    }

    pub fn with_geocode_concurrency(mut self, concurrency: usize) -> Self {
        self.geocode_concurrency = concurrency;
        self
    }

    pub fn with_places_only(mut self, places_only: bool) -> Self {
        self.places_only = places_only;
        self
    }
}
