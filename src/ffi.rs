//! FFI bindings for mobile platforms (iOS/Android).
//!
//! This module provides the UniFFI bindings that expose the run session
//! to Kotlin and Swift. The platform shell keeps ownership of permissions,
//! the location provider and the timer, and forwards their callbacks here.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{debug, info};

use crate::display::{format_average, format_elapsed, DisplayText};
use crate::error::Result;
use crate::geo_utils::{average_speed_kmh, haversine_distance};
use crate::{
    init_logging, LocationRequest, LocationSample, LocationUpdate, RunSession, RunSnapshot,
    RunSummary, SpeedPoint, TrackingConfig,
};

// ============================================================================
// Run Tracker Object
// ============================================================================

/// Thread-safe handle to a run session for generated bindings.
#[derive(uniffi::Object)]
pub struct RunTracker {
    session: Mutex<RunSession>,
}

impl RunTracker {
    fn lock(&self) -> MutexGuard<'_, RunSession> {
        // A panic while holding the lock leaves plain scalar state behind; keep using it
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[uniffi::export]
impl RunTracker {
    /// Create a tracker with the given configuration.
    #[uniffi::constructor]
    pub fn new(config: TrackingConfig) -> Result<Arc<Self>> {
        init_logging();
        info!(
            "[RunTrackerRust] Creating RunTracker (interval {}ms, tick {}ms, chart every {} samples)",
            config.location_interval_ms, config.tick_interval_ms, config.chart_every_n_samples
        );
        Ok(Arc::new(Self {
            session: Mutex::new(RunSession::new(config)?),
        }))
    }

    /// Reset state and begin a run.
    pub fn start(&self) -> Result<()> {
        self.lock().start()
    }

    /// End the run and return its summary.
    pub fn stop(&self) -> Result<RunSummary> {
        self.lock().stop()
    }

    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }

    /// Location callback. Pass the provider's last location.
    pub fn on_location(&self, sample: LocationSample) -> Result<LocationUpdate> {
        debug!(
            "[RunTrackerRust] on_location ({:.6}, {:.6})",
            sample.latitude, sample.longitude
        );
        self.lock().on_location(&sample)
    }

    /// Timer callback. Returns the new elapsed seconds while running.
    pub fn on_tick(&self) -> Option<u64> {
        self.lock().on_tick()
    }

    pub fn snapshot(&self) -> RunSnapshot {
        self.lock().snapshot()
    }

    pub fn summary(&self) -> RunSummary {
        self.lock().summary()
    }

    pub fn chart_points(&self) -> Vec<SpeedPoint> {
        self.lock().chart().points().to_vec()
    }

    /// Subscription request the shell should hand to the location provider.
    pub fn location_request(&self) -> LocationRequest {
        self.lock().config().location_request()
    }

    /// Labelled text for the speed, distance and time fields.
    pub fn display_text(&self) -> DisplayText {
        DisplayText::from_snapshot(&self.lock().snapshot())
    }

    /// Average-speed line for the current (or last) run.
    pub fn average_text(&self) -> String {
        format_average(&self.lock().summary())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Get default configuration.
#[uniffi::export]
pub fn default_tracking_config() -> TrackingConfig {
    init_logging();
    info!("[RunTrackerRust] default_tracking_config called - Rust is active!");
    TrackingConfig::default()
}

/// Parse a JSON configuration; missing fields take their defaults.
#[uniffi::export]
pub fn tracking_config_from_json(json: String) -> Result<TrackingConfig> {
    TrackingConfig::from_json(&json)
}

/// Great-circle distance between two samples in meters.
#[uniffi::export]
pub fn ffi_haversine_distance(a: LocationSample, b: LocationSample) -> f64 {
    haversine_distance(&a, &b)
}

/// Average speed in km/h; 0 if distance or time is zero.
#[uniffi::export]
pub fn ffi_average_speed_kmh(distance_m: f64, elapsed_seconds: u64) -> f64 {
    average_speed_kmh(distance_m, elapsed_seconds)
}

/// Elapsed time as `HH:MM:SS`.
#[uniffi::export]
pub fn ffi_format_elapsed(elapsed_seconds: u64) -> String {
    format_elapsed(elapsed_seconds)
}
