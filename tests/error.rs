//! Tests for error module

use runtracker::error::TrackerError;
use runtracker::TrackingConfig;

#[test]
fn test_error_display() {
    let err = TrackerError::InvalidSample {
        latitude: 91.0,
        longitude: 0.0,
    };
    assert!(err.to_string().contains("91"));

    assert!(TrackerError::PermissionDenied
        .to_string()
        .contains("permission"));
    assert!(TrackerError::LocationDisabled.to_string().contains("disabled"));
}

#[test]
fn test_invalid_config_error() {
    let config = TrackingConfig {
        chart_every_n_samples: 0,
        ..TrackingConfig::default()
    };
    let result = config.validate();
    assert!(matches!(result, Err(TrackerError::InvalidConfig(_))));
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("chart_every_n_samples"));
}
