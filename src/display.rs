//! Text shown in the tracker's UI fields.

use crate::{RunSnapshot, RunSummary};

/// Speed with one decimal, e.g. `"12.3 km/h"`.
pub fn format_speed_kmh(speed_kmh: f64) -> String {
    format!("{:.1} km/h", speed_kmh)
}

/// Distance in kilometers with one decimal, e.g. `"4.2 km"`.
pub fn format_distance_km(distance_m: f64) -> String {
    format!("{:.1} km", distance_m / 1000.0)
}

/// Elapsed time as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_elapsed(elapsed_seconds: u64) -> String {
    let hours = elapsed_seconds / 3600;
    let minutes = (elapsed_seconds % 3600) / 60;
    let seconds = elapsed_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Labelled strings for the speed, distance and time fields.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "ffi", derive(uniffi::Record))]
pub struct DisplayText {
    pub speed: String,
    pub distance: String,
    pub elapsed: String,
}

impl DisplayText {
    pub fn from_snapshot(snapshot: &RunSnapshot) -> Self {
        Self {
            speed: format!("Speed: {}", format_speed_kmh(snapshot.current_speed_kmh)),
            distance: format!("Distance: {}", format_distance_km(snapshot.total_distance_m)),
            elapsed: format!("Time: {}", format_elapsed(snapshot.elapsed_seconds)),
        }
    }
}

/// Line shown when a run stops.
pub fn format_average(summary: &RunSummary) -> String {
    format!("Average: {}", format_speed_kmh(summary.average_speed_kmh))
}
