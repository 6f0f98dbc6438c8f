//! # Run Tracker
//!
//! Tracking core for a single-screen run-tracking mobile app.
//!
//! This library provides:
//! - Great-circle distance accumulation over location samples
//! - Instantaneous speed in km/h and average speed on stop
//! - An elapsed-time clock driven by one-second ticks
//! - A speed-vs-time series for a live chart
//! - A start/stop controller wired to the platform through traits
//!
//! ## Features
//!
//! - **`ffi`** - Enable FFI bindings for mobile platforms (iOS/Android)
//! - **`synthetic`** - Enable the synthetic run generator
//! - **`cli`** - Build the `runtracker-cli` replay tool
//!
//! ## Quick Start
//!
//! ```rust
//! use runtracker::{LocationSample, RunSession, TrackingConfig};
//!
//! let mut session = RunSession::new(TrackingConfig::default()).unwrap();
//! session.start().unwrap();
//!
//! session.on_location(&LocationSample::with_speed(51.5074, -0.1278, 3.0)).unwrap();
//! session.on_tick();
//! session.on_location(&LocationSample::with_speed(51.5080, -0.1278, 3.2)).unwrap();
//!
//! let summary = session.stop().unwrap();
//! println!("{:.2} km at {:.1} km/h", summary.total_distance_m / 1000.0, summary.average_speed_kmh);
//! ```

use serde::{Deserialize, Serialize};

// Unified error handling
pub mod error;
pub use error::{Result, TrackerError};

// Geographic utilities (distance, speed conversions)
pub mod geo_utils;

// Run session state: distance, speed, clock and chart
pub mod session;
pub use session::{LocationUpdate, RunClock, RunSession, RunSnapshot, RunSummary, SpeedChart};

// Platform-facing controller for the start/stop toggle
pub mod controller;
pub use controller::{
    LocationSource, PermissionGate, RunController, TickScheduler, ToggleOutcome, TrackerView,
};

// Display formatting for the UI text fields
pub mod display;
pub use display::DisplayText;

// Deterministic replay of recorded tracks
pub mod replay;
pub use replay::{replay_samples, ReplayResult};

// Synthetic run generation for tests and benchmarks
#[cfg(feature = "synthetic")]
pub mod synthetic;

// FFI bindings for mobile platforms (iOS/Android)
#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "ffi")]
uniffi::setup_scaffolding!();

/// Initialize logging for Android (only used in FFI)
#[cfg(all(feature = "ffi", target_os = "android"))]
pub(crate) fn init_logging() {
    use android_logger::Config;
    use log::LevelFilter;

    android_logger::init_once(
        Config::default()
            .with_max_level(LevelFilter::Debug)
            .with_tag("RunTrackerRust"),
    );
}

#[cfg(all(feature = "ffi", not(target_os = "android")))]
pub(crate) fn init_logging() {
    // No-op on non-Android platforms
}

// ============================================================================
// Core Types
// ============================================================================

/// Conversion factor from meters per second to kilometers per hour.
pub const MPS_TO_KMH: f64 = 3.6;

/// A single location reading with position and instantaneous speed.
///
/// # Example
/// ```
/// use runtracker::LocationSample;
/// let sample = LocationSample::with_speed(51.5074, -0.1278, 2.5);
/// assert_eq!(sample.speed_or_zero(), 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct LocationSample {
    pub latitude: f64,
    pub longitude: f64,
    /// Instantaneous speed in m/s as reported by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_mps: Option<f64>,
    /// Fix time in milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
    /// Horizontal accuracy radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

impl LocationSample {
    /// Create a sample without speed or timestamp.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            speed_mps: None,
            timestamp_ms: None,
            accuracy_m: None,
        }
    }

    /// Create a sample with a reported speed in m/s.
    pub fn with_speed(latitude: f64, longitude: f64, speed_mps: f64) -> Self {
        Self {
            speed_mps: Some(speed_mps),
            ..Self::new(latitude, longitude)
        }
    }

    /// Builder-style timestamp setter.
    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Reported speed, or 0 when the provider has none.
    pub fn speed_or_zero(&self) -> f64 {
        match self.speed_mps {
            Some(s) if s.is_finite() && s >= 0.0 => s,
            _ => 0.0,
        }
    }

    /// Check if the sample has valid coordinates.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }
}

/// One point of the speed-vs-time chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct SpeedPoint {
    pub elapsed_seconds: u64,
    pub speed_kmh: f64,
}

impl SpeedPoint {
    pub fn new(elapsed_seconds: u64, speed_kmh: f64) -> Self {
        Self {
            elapsed_seconds,
            speed_kmh,
        }
    }

    /// The (0, 0) point every chart starts from.
    pub fn origin() -> Self {
        Self::new(0, 0.0)
    }
}

/// Accuracy/power trade-off requested from the location provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "ffi", derive(uniffi::Enum))]
pub enum LocationPriority {
    HighAccuracy,
    BalancedPowerAccuracy,
    LowPower,
    Passive,
}

/// Subscription parameters handed to the platform location provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct LocationRequest {
    pub interval_ms: u64,
    pub priority: LocationPriority,
    pub wait_for_accurate_location: bool,
}

/// Configuration for a tracking session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct TrackingConfig {
    /// Requested interval between location updates.
    /// Default: 5000 ms
    pub location_interval_ms: u64,

    /// Provider priority. Default: high accuracy
    pub priority: LocationPriority,

    /// Whether the provider should hold the first update until an accurate fix.
    /// Default: false
    pub wait_for_accurate_location: bool,

    /// Interval of the elapsed-time tick. Default: 1000 ms
    pub tick_interval_ms: u64,

    /// A chart point is appended on every Nth accepted sample.
    /// Default: 2
    pub chart_every_n_samples: u32,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            location_interval_ms: 5000,
            priority: LocationPriority::HighAccuracy,
            wait_for_accurate_location: false,
            tick_interval_ms: 1000,
            chart_every_n_samples: 2,
        }
    }
}

impl TrackingConfig {
    /// Reject configurations the session cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.location_interval_ms == 0 {
            return Err(TrackerError::InvalidConfig(
                "location_interval_ms must be > 0".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(TrackerError::InvalidConfig(
                "tick_interval_ms must be > 0".to_string(),
            ));
        }
        if self.chart_every_n_samples == 0 {
            return Err(TrackerError::InvalidConfig(
                "chart_every_n_samples must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| TrackerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// The subscription request derived from this configuration.
    pub fn location_request(&self) -> LocationRequest {
        LocationRequest {
            interval_ms: self.location_interval_ms,
            priority: self.priority,
            wait_for_accurate_location: self.wait_for_accurate_location,
        }
    }
}
