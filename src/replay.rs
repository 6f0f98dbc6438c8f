//! Deterministic replay of a recorded track through a [`RunSession`].
//!
//! Sample timestamps stand in for the platform clock: before each sample,
//! the session receives one tick per tick interval that has fully elapsed. Samples without
//! timestamps are spaced at the configured location interval. Samples
//! without a reported speed get one derived from the previous segment.

use log::{debug, info};

use crate::error::{Result, TrackerError};
use crate::geo_utils::haversine_distance;
use crate::{LocationSample, LocationUpdate, RunSession, RunSummary, SpeedPoint, TrackingConfig};

/// Step of a replay, reported to the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplayEvent {
    Tick(u64),
    Sample(LocationUpdate),
}

/// Result of replaying a track.
#[derive(Debug, Clone)]
pub struct ReplayResult {
    pub summary: RunSummary,
    pub chart: Vec<SpeedPoint>,
    pub samples_accepted: usize,
    pub samples_rejected: usize,
}

/// Replay samples and return the final summary and chart.
pub fn replay_samples(samples: &[LocationSample], config: &TrackingConfig) -> Result<ReplayResult> {
    replay_with(samples, config, |_| {})
}

/// Replay samples, calling `observer` for every tick and accepted sample.
pub fn replay_with<F>(
    samples: &[LocationSample],
    config: &TrackingConfig,
    mut observer: F,
) -> Result<ReplayResult>
where
    F: FnMut(&ReplayEvent),
{
    let mut session = RunSession::new(config.clone())?;
    info!("[Replay] Replaying {} samples", samples.len());

    let timed = with_timestamps(samples, config.location_interval_ms);
    let start_ms = timed.first().and_then(|s| s.timestamp_ms).unwrap_or(0);

    session.start()?;

    let mut accepted = 0;
    let mut rejected = 0;
    let mut previous: Option<LocationSample> = None;

    for sample in &timed {
        let offset_ms = sample.timestamp_ms.unwrap_or(start_ms).saturating_sub(start_ms);
        while session
            .elapsed_ms()
            .checked_add(config.tick_interval_ms)
            .is_some_and(|next_ms| next_ms <= offset_ms)
        {
            if let Some(elapsed) = session.on_tick() {
                observer(&ReplayEvent::Tick(elapsed));
            }
        }

        let sample = with_derived_speed(sample, previous.as_ref());
        match session.on_location(&sample) {
            Ok(update) => {
                accepted += 1;
                previous = Some(sample);
                observer(&ReplayEvent::Sample(update));
            }
            Err(TrackerError::InvalidSample { .. }) => {
                rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }

    let summary = session.stop()?;
    debug!(
        "[Replay] Done: {} accepted, {} rejected, {} chart points",
        accepted,
        rejected,
        session.chart().len()
    );

    Ok(ReplayResult {
        summary,
        chart: session.chart().points().to_vec(),
        samples_accepted: accepted,
        samples_rejected: rejected,
    })
}

/// Fill missing timestamps at `interval_ms` steps.
///
/// Untimed samples after a timed one continue from it. Untimed samples
/// before the first timed one are placed backwards from it, saturating at 0.
/// A track with no timestamps at all starts at 0.
fn with_timestamps(samples: &[LocationSample], interval_ms: u64) -> Vec<LocationSample> {
    let first_known = samples
        .iter()
        .enumerate()
        .find_map(|(i, s)| s.timestamp_ms.map(|ts| (i, ts)));

    let mut last_ms: Option<u64> = None;
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let ts = match (s.timestamp_ms, last_ms, first_known) {
                (Some(ts), _, _) => ts,
                (None, Some(last), _) => last.saturating_add(interval_ms),
                (None, None, Some((k, first_ts))) => {
                    let steps = (k - i) as u64;
                    first_ts.saturating_sub(steps.saturating_mul(interval_ms))
                }
                (None, None, None) => 0,
            };
            if i >= first_known.map_or(0, |(k, _)| k) {
                last_ms = Some(ts);
            }
            LocationSample {
                timestamp_ms: Some(ts),
                ..*s
            }
        })
        .collect()
}

/// Derive m/s from the previous segment when the sample reports no speed.
fn with_derived_speed(sample: &LocationSample, previous: Option<&LocationSample>) -> LocationSample {
    if sample.speed_mps.is_some() {
        return *sample;
    }
    let speed = previous
        .and_then(|prev| {
            let dt_ms = sample.timestamp_ms?.checked_sub(prev.timestamp_ms?)?;
            if dt_ms == 0 {
                return None;
            }
            Some(haversine_distance(prev, sample) / (dt_ms as f64 / 1000.0))
        })
        .unwrap_or(0.0);
    LocationSample {
        speed_mps: Some(speed),
        ..*sample
    }
}
