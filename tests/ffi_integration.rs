//! FFI integration tests.
//!
//! These tests exercise the public FFI API exposed to mobile platforms.
#![cfg(feature = "ffi")]

use runtracker::{
    ffi::{
        default_tracking_config, ffi_average_speed_kmh, ffi_format_elapsed,
        ffi_haversine_distance, tracking_config_from_json, RunTracker,
    },
    LocationSample, SpeedPoint, TrackerError, TrackingConfig,
};

fn sample(i: usize) -> LocationSample {
    LocationSample::with_speed(51.5074 + i as f64 * 0.001, -0.1278, 3.0)
}

#[test]
fn test_tracker_full_run() {
    let tracker = RunTracker::new(default_tracking_config()).unwrap();
    assert!(!tracker.is_running());

    tracker.start().unwrap();
    for i in 0..6 {
        tracker.on_tick();
        tracker.on_tick();
        tracker.on_location(sample(i)).unwrap();
    }

    let snapshot = tracker.snapshot();
    assert!(snapshot.running);
    assert_eq!(snapshot.elapsed_seconds, 12);
    assert_eq!(snapshot.sample_count, 6);
    assert_eq!(tracker.chart_points().len(), 4);
    assert_eq!(tracker.display_text().elapsed, "Time: 00:00:12");

    let summary = tracker.stop().unwrap();
    assert_eq!(summary.elapsed_seconds, 12);
    assert!(summary.total_distance_m > 550.0);
    assert_eq!(tracker.on_tick(), None);
    assert!(tracker.average_text().starts_with("Average: "));
}

#[test]
fn test_tracker_rejects_invalid_config() {
    let config = TrackingConfig {
        location_interval_ms: 0,
        ..TrackingConfig::default()
    };
    assert!(matches!(
        RunTracker::new(config),
        Err(TrackerError::InvalidConfig(_))
    ));
}

#[test]
fn test_tracker_errors_cross_boundary() {
    let tracker = RunTracker::new(TrackingConfig::default()).unwrap();
    assert!(matches!(
        tracker.on_location(sample(0)),
        Err(TrackerError::NotRunning)
    ));
    assert!(matches!(tracker.stop(), Err(TrackerError::NotRunning)));
}

#[test]
fn test_tracker_reset() {
    let tracker = RunTracker::new(TrackingConfig::default()).unwrap();
    tracker.start().unwrap();
    tracker.on_location(sample(0)).unwrap();
    tracker.on_location(sample(1)).unwrap();
    tracker.reset();

    assert_eq!(tracker.summary().total_distance_m, 0.0);
    assert_eq!(tracker.chart_points(), vec![SpeedPoint::origin()]);
    assert_eq!(tracker.location_request().interval_ms, 5000);
}

#[test]
fn test_free_functions() {
    let d = ffi_haversine_distance(sample(0), sample(1));
    assert!((d - 111.195).abs() < 0.01);
    assert!((ffi_average_speed_kmh(10_000.0, 3600) - 10.0).abs() < 1e-9);
    assert_eq!(ffi_format_elapsed(3725), "01:02:05");

    let config = tracking_config_from_json(r#"{"chart_every_n_samples": 3}"#.to_string()).unwrap();
    assert_eq!(config.chart_every_n_samples, 3);
}
