//! Elapsed-time counter advanced by periodic ticks.

/// Time since the run started, advanced one tick interval at a time.
///
/// The clock has no notion of wall time; the platform tick scheduler
/// drives it every `tick_interval_ms` while a run is active. Elapsed time
/// is kept in milliseconds and reported in whole seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunClock {
    tick_interval_ms: u64,
    elapsed_ms: u64,
}

impl Default for RunClock {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl RunClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            elapsed_ms: 0,
        }
    }

    /// Advance by one tick interval and return the elapsed whole seconds.
    pub fn tick(&mut self) -> u64 {
        self.elapsed_ms = self.elapsed_ms.saturating_add(self.tick_interval_ms);
        self.elapsed()
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}
