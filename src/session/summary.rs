//! End-of-run summary.

use serde::{Deserialize, Serialize};

use crate::geo_utils::average_speed_kmh;

/// Totals shown when a run is stopped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct RunSummary {
    /// Total distance in meters
    pub total_distance_m: f64,
    pub elapsed_seconds: u64,
    /// Total km over elapsed hours, 0 if either is zero
    pub average_speed_kmh: f64,
}

impl RunSummary {
    pub fn new(total_distance_m: f64, elapsed_seconds: u64) -> Self {
        Self {
            total_distance_m,
            elapsed_seconds,
            average_speed_kmh: average_speed_kmh(total_distance_m, elapsed_seconds),
        }
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_m / 1000.0
    }
}
