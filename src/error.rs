//! Unified error type for the run tracker.

use thiserror::Error;

/// Errors surfaced by the session and controller.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "ffi", derive(uniffi::Error))]
#[cfg_attr(feature = "ffi", uniffi(flat_error))]
pub enum TrackerError {
    /// Location permission has not been granted
    #[error("location permission is required to track a run")]
    PermissionDenied,

    /// The device location service (GPS) is switched off
    #[error("location service is disabled")]
    LocationDisabled,

    #[error("a run is already in progress")]
    AlreadyRunning,

    #[error("no run is in progress")]
    NotRunning,

    /// Sample with out-of-range or non-finite coordinates
    #[error("invalid sample at ({latitude}, {longitude})")]
    InvalidSample { latitude: f64, longitude: f64 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TrackerError>;
