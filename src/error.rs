//! Error handling for location-history conversion.
//!
//! File-level and run-level failures are `ConverterError`s. Record-level
//! problems that only drop a single record are modelled separately as
//! [`crate::models::SkipReason`] so they can be counted instead of aborting.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input not found at path: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Malformed JSON in file: {path} - {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unrecognized document in file: {path} (expected 'ig_stories' or 'timelineObjects')")]
    UnknownDocument { path: PathBuf },

    #[error("Timestamp '{input}' does not match any supported layout")]
    Format { input: String },

    #[error("Place '{place_id}' could not be resolved")]
    UnresolvedPlace { place_id: String },

    #[error("Geocoding service error for place '{place_id}': {reason}")]
    RemoteService { place_id: String, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl ConverterError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// Create a remote service error for a place lookup
    pub fn remote_service(place_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RemoteService {
            place_id: place_id.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error is scoped to a single input file.
    ///
    /// Batch conversion skips the file and carries on for these; anything
    /// else aborts the run.
    pub fn is_file_scoped(&self) -> bool {
        matches!(
            self,
            Self::MalformedJson { .. }
                | Self::UnknownDocument { .. }
                | Self::InputNotFound { .. }
                | Self::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ConverterError>;
