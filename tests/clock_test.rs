//! Integration tests for RunClock

use runtracker::RunClock;

#[test]
fn test_clock_ticks_by_one_second() {
    let mut clock = RunClock::default();
    assert_eq!(clock.elapsed(), 0);
    assert_eq!(clock.tick(), 1);
    assert_eq!(clock.tick(), 2);
    assert_eq!(clock.elapsed(), 2);
    assert_eq!(clock.elapsed_ms(), 2000);
}

#[test]
fn test_clock_sub_second_interval() {
    let mut clock = RunClock::new(500);
    assert_eq!(clock.tick(), 0);
    assert_eq!(clock.tick(), 1);
    assert_eq!(clock.tick(), 1);
    assert_eq!(clock.tick(), 2);
    assert_eq!(clock.elapsed_ms(), 2000);
}

#[test]
fn test_clock_multi_second_interval() {
    let mut clock = RunClock::new(2500);
    assert_eq!(clock.tick(), 2);
    assert_eq!(clock.tick(), 5);
}

#[test]
fn test_clock_reset() {
    let mut clock = RunClock::default();
    for _ in 0..90 {
        clock.tick();
    }
    assert_eq!(clock.elapsed(), 90);
    clock.reset();
    assert_eq!(clock.elapsed(), 0);
    assert_eq!(clock.tick_interval_ms(), 1000);
}
