//! Integration tests for SpeedChart

use runtracker::{SpeedChart, SpeedPoint, TrackerError};

#[test]
fn test_chart_seeded_with_origin() {
    let chart = SpeedChart::new(2).unwrap();
    assert_eq!(chart.points(), &[SpeedPoint::origin()]);
    assert_eq!(chart.len(), 1);
    assert!(!chart.is_empty());
}

#[test]
fn test_record_every_nth_sample() {
    let mut chart = SpeedChart::new(2).unwrap();
    assert_eq!(chart.record(1, 5, 10.0), None);
    assert_eq!(chart.record(2, 10, 11.0), Some(SpeedPoint::new(10, 11.0)));
    assert_eq!(chart.record(3, 15, 12.0), None);
    assert_eq!(chart.record(4, 20, 13.0), Some(SpeedPoint::new(20, 13.0)));
    assert_eq!(chart.len(), 3);
}

#[test]
fn test_record_rejects_non_advancing_x() {
    let mut chart = SpeedChart::new(1).unwrap();
    assert!(chart.record(1, 3, 9.0).is_some());
    assert!(chart.record(2, 3, 9.5).is_none());
    assert!(chart.record(3, 2, 9.5).is_none());
    assert!(chart.record(4, 4, 9.5).is_some());
    assert_eq!(chart.last(), Some(&SpeedPoint::new(4, 9.5)));
}

#[test]
fn test_origin_blocks_point_at_zero() {
    let mut chart = SpeedChart::new(1).unwrap();
    assert!(chart.record(1, 0, 12.0).is_none());
    assert_eq!(chart.len(), 1);
}

#[test]
fn test_zero_cadence_rejected() {
    assert!(matches!(
        SpeedChart::new(0),
        Err(TrackerError::InvalidConfig(_))
    ));
}

#[test]
fn test_default_charts_every_other_sample() {
    let mut chart = SpeedChart::default();
    assert!(chart.record(1, 1, 5.0).is_none());
    assert!(chart.record(2, 2, 5.0).is_some());
}

#[test]
fn test_clear_reseeds() {
    let mut chart = SpeedChart::new(1).unwrap();
    chart.record(1, 1, 8.0);
    chart.record(2, 2, 14.0);
    assert_eq!(chart.max_speed_kmh(), 14.0);

    chart.clear();
    assert_eq!(chart.points(), &[SpeedPoint::origin()]);
    assert_eq!(chart.max_speed_kmh(), 0.0);
}
