//! Geographic and speed helpers.

use crate::{LocationSample, MPS_TO_KMH};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two samples in meters.
///
/// # Example
/// ```
/// use runtracker::LocationSample;
/// use runtracker::geo_utils::haversine_distance;
///
/// let a = LocationSample::new(51.5074, -0.1278);
/// let b = LocationSample::new(51.5084, -0.1278);
/// let d = haversine_distance(&a, &b);
/// assert!((d - 111.2).abs() < 1.0);
/// ```
pub fn haversine_distance(a: &LocationSample, b: &LocationSample) -> f64 {
    haversine_distance_coords(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Great-circle distance between two raw coordinate pairs in meters.
pub fn haversine_distance_coords(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lng2 - lng1).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    // Clamp guards against h drifting just above 1.0 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_M * c
}

/// Total length of a track in meters.
pub fn track_distance(points: &[LocationSample]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .windows(2)
        .map(|pair| haversine_distance(&pair[0], &pair[1]))
        .sum()
}

/// Convert m/s to km/h.
#[inline]
pub fn mps_to_kmh(mps: f64) -> f64 {
    mps * MPS_TO_KMH
}

/// Average speed in km/h over a run.
///
/// Returns 0 when either the distance or the elapsed time is zero.
pub fn average_speed_kmh(distance_m: f64, elapsed_seconds: u64) -> f64 {
    if elapsed_seconds == 0 || !distance_m.is_finite() || distance_m <= 0.0 {
        return 0.0;
    }
    let km = distance_m / 1000.0;
    let hours = elapsed_seconds as f64 / 3600.0;
    km / hours
}
