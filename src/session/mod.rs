//! # Run Session
//!
//! State of one run and the arithmetic performed on every callback.
//!
//! ## Architecture
//!
//! The session is composed of small pieces:
//! - `RunClock` - Elapsed seconds, advanced by ticks
//! - `SpeedChart` - Seeded, decimated speed-vs-time series
//! - `RunSummary` - Average speed computed on stop
//!
//! All state lives in memory and is reset at the start of every run.

pub mod clock;
pub mod speed_chart;
pub mod summary;

pub use clock::RunClock;
pub use speed_chart::SpeedChart;
pub use summary::RunSummary;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackerError};
use crate::geo_utils::{haversine_distance, mps_to_kmh};
use crate::{LocationSample, SpeedPoint, TrackingConfig};

/// Outcome of one accepted location sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct LocationUpdate {
    /// Distance from the previous sample in meters (0 for the first one)
    pub segment_distance_m: f64,
    pub total_distance_m: f64,
    pub speed_kmh: f64,
    /// Chart point appended by this sample, if any
    pub chart_point: Option<SpeedPoint>,
}

/// Copy of the display-relevant session state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RunSnapshot {
    pub running: bool,
    pub total_distance_m: f64,
    pub current_speed_kmh: f64,
    pub elapsed_seconds: u64,
    pub sample_count: u64,
    pub chart_len: u64,
}

/// Tracking state for a start-to-stop run.
///
/// Invariants:
/// - `previous` is `None` exactly when no sample was accepted since reset
/// - distance and elapsed time reset together in [`RunSession::start`]
/// - chart x-coordinates are strictly increasing
#[derive(Debug, Clone)]
pub struct RunSession {
    config: TrackingConfig,
    running: bool,
    previous: Option<LocationSample>,
    total_distance_m: f64,
    current_speed_kmh: f64,
    sample_count: u64,
    clock: RunClock,
    chart: SpeedChart,
}

impl Default for RunSession {
    fn default() -> Self {
        Self {
            config: TrackingConfig::default(),
            running: false,
            previous: None,
            total_distance_m: 0.0,
            current_speed_kmh: 0.0,
            sample_count: 0,
            clock: RunClock::default(),
            chart: SpeedChart::default(),
        }
    }
}

impl RunSession {
    /// Create a stopped session with zeroed state.
    ///
    /// Fails with [`TrackerError::InvalidConfig`] if the configuration
    /// does not pass [`TrackingConfig::validate`].
    pub fn new(config: TrackingConfig) -> Result<Self> {
        config.validate()?;
        let chart = SpeedChart::new(config.chart_every_n_samples)?;
        let clock = RunClock::new(config.tick_interval_ms);
        Ok(Self {
            config,
            running: false,
            previous: None,
            total_distance_m: 0.0,
            current_speed_kmh: 0.0,
            sample_count: 0,
            clock,
            chart,
        })
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Reset all state and begin a new run.
    pub fn start(&mut self) -> Result<()> {
        if self.running {
            return Err(TrackerError::AlreadyRunning);
        }
        self.reset();
        self.running = true;
        info!("[RunSession] Run started");
        Ok(())
    }

    /// End the current run and return its summary.
    ///
    /// State stays readable until the next [`RunSession::start`].
    pub fn stop(&mut self) -> Result<RunSummary> {
        if !self.running {
            return Err(TrackerError::NotRunning);
        }
        self.running = false;
        let summary = self.summary();
        info!(
            "[RunSession] Run stopped: {:.0}m in {}s, avg {:.1} km/h",
            summary.total_distance_m, summary.elapsed_seconds, summary.average_speed_kmh
        );
        Ok(summary)
    }

    /// Zero distance, speed, elapsed time and the chart.
    pub fn reset(&mut self) {
        self.previous = None;
        self.total_distance_m = 0.0;
        self.current_speed_kmh = 0.0;
        self.sample_count = 0;
        self.clock.reset();
        self.chart.clear();
        debug!("[RunSession] State reset");
    }

    // ========================================================================
    // Callbacks
    // ========================================================================

    /// Apply one location sample.
    ///
    /// Speed comes from the sample itself; distance is the great-circle
    /// distance from the previous accepted sample.
    pub fn on_location(&mut self, sample: &LocationSample) -> Result<LocationUpdate> {
        if !self.running {
            return Err(TrackerError::NotRunning);
        }
        if !sample.is_valid() {
            warn!(
                "[RunSession] Dropping invalid sample ({}, {})",
                sample.latitude, sample.longitude
            );
            return Err(TrackerError::InvalidSample {
                latitude: sample.latitude,
                longitude: sample.longitude,
            });
        }

        self.current_speed_kmh = mps_to_kmh(sample.speed_or_zero());

        let segment_distance_m = self
            .previous
            .as_ref()
            .map(|prev| haversine_distance(prev, sample))
            .unwrap_or(0.0);
        self.total_distance_m += segment_distance_m;
        self.previous = Some(*sample);

        self.sample_count += 1;
        let chart_point =
            self.chart
                .record(self.sample_count, self.clock.elapsed(), self.current_speed_kmh);

        debug!(
            "[RunSession] Sample #{}: +{:.1}m, total {:.1}m, {:.1} km/h",
            self.sample_count, segment_distance_m, self.total_distance_m, self.current_speed_kmh
        );

        Ok(LocationUpdate {
            segment_distance_m,
            total_distance_m: self.total_distance_m,
            speed_kmh: self.current_speed_kmh,
            chart_point,
        })
    }

    /// Advance the elapsed-time clock by one tick interval.
    ///
    /// Returns the elapsed whole seconds, or `None` when no run is active.
    pub fn on_tick(&mut self) -> Option<u64> {
        if !self.running {
            return None;
        }
        Some(self.clock.tick())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &TrackingConfig {
        &self.config
    }

    pub fn previous_location(&self) -> Option<&LocationSample> {
        self.previous.as_ref()
    }

    pub fn total_distance_m(&self) -> f64 {
        self.total_distance_m
    }

    pub fn current_speed_kmh(&self) -> f64 {
        self.current_speed_kmh
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms()
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn chart(&self) -> &SpeedChart {
        &self.chart
    }

    /// Summary of the current (or last) run.
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.total_distance_m, self.clock.elapsed())
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            running: self.running,
            total_distance_m: self.total_distance_m,
            current_speed_kmh: self.current_speed_kmh,
            elapsed_seconds: self.clock.elapsed(),
            sample_count: self.sample_count,
            chart_len: u64::try_from(self.chart.len()).unwrap_or(u64::MAX),
        }
    }
}
