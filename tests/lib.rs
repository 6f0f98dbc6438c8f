//! Tests for lib.rs core types

use runtracker::{LocationPriority, LocationSample, SpeedPoint, TrackerError, TrackingConfig};

#[test]
fn test_location_sample_validation() {
    assert!(LocationSample::new(51.5074, -0.1278).is_valid());
    assert!(!LocationSample::new(91.0, 0.0).is_valid());
    assert!(!LocationSample::new(0.0, 181.0).is_valid());
    assert!(!LocationSample::new(f64::NAN, 0.0).is_valid());
}

#[test]
fn test_missing_speed_counts_as_zero() {
    assert_eq!(LocationSample::new(51.5, -0.12).speed_or_zero(), 0.0);
    assert_eq!(
        LocationSample::with_speed(51.5, -0.12, f64::NAN).speed_or_zero(),
        0.0
    );
    assert_eq!(
        LocationSample::with_speed(51.5, -0.12, 3.5).speed_or_zero(),
        3.5
    );
}

#[test]
fn test_sample_builder_timestamp() {
    let sample = LocationSample::new(51.5, -0.12).at(1_700_000_000_000);
    assert_eq!(sample.timestamp_ms, Some(1_700_000_000_000));
}

#[test]
fn test_speed_point_origin() {
    assert_eq!(SpeedPoint::origin(), SpeedPoint::new(0, 0.0));
}

#[test]
fn test_default_config() {
    let config = TrackingConfig::default();
    assert_eq!(config.location_interval_ms, 5000);
    assert_eq!(config.priority, LocationPriority::HighAccuracy);
    assert!(!config.wait_for_accurate_location);
    assert_eq!(config.tick_interval_ms, 1000);
    assert_eq!(config.chart_every_n_samples, 2);
    assert!(config.validate().is_ok());
}

#[test]
fn test_location_request_from_config() {
    let request = TrackingConfig::default().location_request();
    assert_eq!(request.interval_ms, 5000);
    assert_eq!(request.priority, LocationPriority::HighAccuracy);
    assert!(!request.wait_for_accurate_location);
}

#[test]
fn test_config_from_partial_json() {
    let config =
        TrackingConfig::from_json(r#"{"location_interval_ms": 2000, "priority": "balanced_power_accuracy"}"#)
            .unwrap();
    assert_eq!(config.location_interval_ms, 2000);
    assert_eq!(config.priority, LocationPriority::BalancedPowerAccuracy);
    // Unspecified fields keep their defaults
    assert_eq!(config.tick_interval_ms, 1000);
    assert_eq!(config.chart_every_n_samples, 2);
}

#[test]
fn test_config_from_json_rejects_bad_input() {
    assert!(matches!(
        TrackingConfig::from_json("not json"),
        Err(TrackerError::InvalidConfig(_))
    ));
    assert!(matches!(
        TrackingConfig::from_json(r#"{"tick_interval_ms": 0}"#),
        Err(TrackerError::InvalidConfig(_))
    ));
}

#[test]
fn test_sample_serde_skips_missing_fields() {
    let json = serde_json::to_string(&LocationSample::new(1.0, 2.0)).unwrap();
    assert_eq!(json, r#"{"latitude":1.0,"longitude":2.0}"#);

    let back: LocationSample = serde_json::from_str(&json).unwrap();
    assert_eq!(back, LocationSample::new(1.0, 2.0));
}
