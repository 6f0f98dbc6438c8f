//! Synthetic run generator for testing and benchmarking.
//!
//! Produces timestamped location samples for a runner moving at a known
//! pace, so distance, speed and elapsed time have a ground truth.
//!
//! Feature-gated behind `synthetic` — not included in production builds.
//!
//! # Example
//!
//! ```rust
//! use runtracker::synthetic::{RunPattern, SyntheticRun};
//! use runtracker::LocationSample;
//!
//! let run = SyntheticRun {
//!     origin: LocationSample::new(47.37, 8.55),
//!     distance_meters: 5_000.0,
//!     pace_min_per_km: 5.0,
//!     sample_interval_ms: 5_000,
//!     pattern: RunPattern::Straight,
//!     gps_noise_sigma_meters: 0.0,
//!     seed: 42,
//! };
//!
//! let samples = run.generate();
//! assert!(samples.len() > 300);
//! ```

use crate::LocationSample;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

// ============================================================================
// Types
// ============================================================================

/// Shape of the generated route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPattern {
    /// Straight line heading north-east.
    Straight,
    /// Circle that returns to its start.
    Loop,
}

/// Scenario configuration for a synthetic run.
#[derive(Debug, Clone)]
pub struct SyntheticRun {
    /// Start point of the run.
    pub origin: LocationSample,
    /// Total ground-truth distance in meters.
    pub distance_meters: f64,
    /// Constant pace in minutes per kilometer.
    pub pace_min_per_km: f64,
    /// Time between samples.
    pub sample_interval_ms: u64,
    pub pattern: RunPattern,
    /// GPS noise standard deviation in meters.
    pub gps_noise_sigma_meters: f64,
    /// RNG seed for deterministic reproduction.
    pub seed: u64,
}

impl SyntheticRun {
    /// Constant speed implied by the pace, in m/s.
    pub fn speed_mps(&self) -> f64 {
        if self.pace_min_per_km <= 0.0 {
            return 0.0;
        }
        1000.0 / (self.pace_min_per_km * 60.0)
    }

    /// Ground-truth duration in whole seconds.
    pub fn duration_seconds(&self) -> u64 {
        let speed = self.speed_mps();
        if speed <= 0.0 {
            return 0;
        }
        (self.distance_meters / speed).round() as u64
    }

    /// Generate the samples, first one at t = 0.
    pub fn generate(&self) -> Vec<LocationSample> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let speed = self.speed_mps();
        let step_meters = speed * self.sample_interval_ms as f64 / 1000.0;
        if step_meters <= 0.0 {
            return vec![self.origin.at(0)];
        }

        let steps = (self.distance_meters / step_meters).ceil() as usize;
        let start_ms = self.origin.timestamp_ms.unwrap_or(0);
        let loop_radius = self.distance_meters / (2.0 * PI);

        (0..=steps)
            .map(|i| {
                let travelled = (i as f64 * step_meters).min(self.distance_meters);
                let (north, east) = match self.pattern {
                    RunPattern::Straight => {
                        let heading = PI / 4.0;
                        (travelled * heading.cos(), travelled * heading.sin())
                    }
                    RunPattern::Loop => {
                        let angle = travelled / loop_radius;
                        (loop_radius * angle.sin(), loop_radius * (1.0 - angle.cos()))
                    }
                };
                let (noise_n, noise_e) = gaussian_pair(self.gps_noise_sigma_meters, &mut rng);
                let latitude = self.origin.latitude + meters_to_deg_lat(north + noise_n);
                let longitude = self.origin.longitude
                    + meters_to_deg_lng(east + noise_e, self.origin.latitude);

                LocationSample {
                    latitude,
                    longitude,
                    speed_mps: Some(speed),
                    timestamp_ms: Some(start_ms + i as u64 * self.sample_interval_ms),
                    accuracy_m: Some(self.gps_noise_sigma_meters.max(3.0)),
                }
            })
            .collect()
    }
}

// ============================================================================
// Coordinate Helpers
// ============================================================================

/// Meters per degree of latitude (approximately constant).
const METERS_PER_DEG_LAT: f64 = 111_320.0;

fn meters_to_deg_lat(meters: f64) -> f64 {
    meters / METERS_PER_DEG_LAT
}

fn meters_to_deg_lng(meters: f64, latitude: f64) -> f64 {
    let meters_per_deg_lng = METERS_PER_DEG_LAT * latitude.to_radians().cos();
    if meters_per_deg_lng.abs() < 1e-10 {
        return 0.0;
    }
    meters / meters_per_deg_lng
}

/// Two independent Gaussian offsets (Box-Muller).
fn gaussian_pair(sigma: f64, rng: &mut StdRng) -> (f64, f64) {
    if sigma <= 0.0 {
        return (0.0, 0.0);
    }
    let u1: f64 = rng.gen_range(0.0001..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);
    let r = (-2.0 * u1.ln()).sqrt() * sigma;
    (r * (2.0 * PI * u2).cos(), r * (2.0 * PI * u2).sin())
}
