//! Speed-vs-time series backing the live chart.
//!
//! The series always starts at (0, 0). Samples are decimated by count so the
//! chart only grows on every Nth location update, and x-coordinates stay
//! strictly increasing.

use crate::error::{Result, TrackerError};
use crate::SpeedPoint;

/// Ordered chart points with sample-count decimation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedChart {
    points: Vec<SpeedPoint>,
    every_n_samples: u32,
}

impl SpeedChart {
    /// Create a chart seeded with the origin point.
    ///
    /// Fails with [`TrackerError::InvalidConfig`] when `every_n_samples` is 0.
    pub fn new(every_n_samples: u32) -> Result<Self> {
        if every_n_samples == 0 {
            return Err(TrackerError::InvalidConfig(
                "chart_every_n_samples must be > 0".to_string(),
            ));
        }
        Ok(Self {
            points: vec![SpeedPoint::origin()],
            every_n_samples,
        })
    }

    /// Offer a sample to the chart.
    ///
    /// `sample_index` is the 1-based count of accepted samples since reset.
    /// Returns the appended point, or `None` if the sample was skipped by
    /// decimation or would not advance the x-axis.
    pub fn record(
        &mut self,
        sample_index: u64,
        elapsed_seconds: u64,
        speed_kmh: f64,
    ) -> Option<SpeedPoint> {
        if sample_index == 0 || sample_index % self.every_n_samples as u64 != 0 {
            return None;
        }
        if let Some(last) = self.points.last() {
            if elapsed_seconds <= last.elapsed_seconds {
                return None;
            }
        }
        let point = SpeedPoint::new(elapsed_seconds, speed_kmh);
        self.points.push(point);
        Some(point)
    }

    /// Drop all points and re-seed with the origin.
    pub fn clear(&mut self) {
        self.points.clear();
        self.points.push(SpeedPoint::origin());
    }

    pub fn points(&self) -> &[SpeedPoint] {
        &self.points
    }

    pub fn last(&self) -> Option<&SpeedPoint> {
        self.points.last()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Highest speed on the chart, used to scale the y-axis.
    pub fn max_speed_kmh(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.speed_kmh)
            .fold(0.0, f64::max)
    }
}

impl Default for SpeedChart {
    fn default() -> Self {
        Self {
            points: vec![SpeedPoint::origin()],
            every_n_samples: 2,
        }
    }
}
