//! Core error types for puffless-core.
//!
//! Only ambient failures are errors here: device-state I/O and backend
//! transport. Step validation failures are ordinary values
//! ([`crate::intake::StepOutcome::Rejected`]) and a missing plan
//! prerequisite is a redirect ([`crate::intake::PlanGate::Redirect`]),
//! so neither appears in this hierarchy.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for puffless-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Device-state / configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Backend service errors
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Device-state / configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The per-user data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDirUnavailable(String),

    /// Failed to load the device-state file
    #[error("Failed to load device state from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save the device-state file
    #[error("Failed to save device state to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse the device-state file
    #[error("Failed to parse device state: {0}")]
    ParseFailed(String),
}

/// Backend service errors.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Request never produced an HTTP response
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape
    #[error("Malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
