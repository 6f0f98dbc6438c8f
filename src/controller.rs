//! Start/stop controller between the platform and the run session.
//!
//! The platform shell implements the four traits below; the controller owns
//! the session and decides when to subscribe, schedule ticks and refresh
//! the view. Callbacks are expected on a single (main) thread.

use log::{debug, info, warn};

use crate::display::{format_average, format_elapsed, DisplayText};
use crate::error::{Result, TrackerError};
use crate::{LocationRequest, LocationSample, RunSession, RunSummary, SpeedPoint, TrackingConfig};

/// Access to the platform's location permission.
pub trait PermissionGate {
    fn has_location_permission(&self) -> bool;
    /// Ask the user for permission. The answer arrives out of band.
    fn request_location_permission(&mut self);
}

/// Platform location provider.
pub trait LocationSource {
    /// Whether the device location service (GPS) is switched on.
    fn is_location_enabled(&self) -> bool;
    /// Begin delivering samples to [`RunController::on_location_result`].
    fn request_updates(&mut self, request: &LocationRequest);
    fn remove_updates(&mut self);
}

/// Periodic timer that calls [`RunController::on_tick`].
pub trait TickScheduler {
    fn schedule(&mut self, interval_ms: u64);
    fn cancel(&mut self);
}

/// UI surface of the tracker.
pub trait TrackerView {
    fn show_metrics(&mut self, text: &DisplayText);
    fn show_elapsed(&mut self, elapsed: &str);
    fn push_chart_point(&mut self, point: SpeedPoint);
    fn reset_chart(&mut self, points: &[SpeedPoint]);
    /// Switch the toggle button between play and stop.
    fn set_running(&mut self, running: bool);
    fn show_summary(&mut self, summary: &RunSummary, average: &str);
}

/// What a press of the start/stop button did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleOutcome {
    Started,
    Stopped(RunSummary),
}

/// Drives a [`RunSession`] from platform callbacks.
pub struct RunController<S, P, T, V> {
    session: RunSession,
    source: S,
    permissions: P,
    ticker: T,
    view: V,
}

impl<S, P, T, V> RunController<S, P, T, V>
where
    S: LocationSource,
    P: PermissionGate,
    T: TickScheduler,
    V: TrackerView,
{
    /// Wire a session to the platform. The configuration is validated
    /// before anything is handed to the location source or the ticker.
    pub fn new(
        config: TrackingConfig,
        source: S,
        permissions: P,
        ticker: T,
        view: V,
    ) -> Result<Self> {
        Ok(Self {
            session: RunSession::new(config)?,
            source,
            permissions,
            ticker,
            view,
        })
    }

    /// Screen creation: ask for permission up front if it is missing.
    pub fn attach(&mut self) {
        if !self.permissions.has_location_permission() {
            info!("[RunController] Location permission missing, requesting");
            self.permissions.request_location_permission();
        }
        self.refresh_view();
    }

    /// Handle a press of the start/stop button.
    pub fn toggle(&mut self) -> Result<ToggleOutcome> {
        if self.session.is_running() {
            self.stop().map(ToggleOutcome::Stopped)
        } else {
            self.start().map(|_| ToggleOutcome::Started)
        }
    }

    fn start(&mut self) -> Result<()> {
        if !self.permissions.has_location_permission() {
            warn!("[RunController] Start refused: no location permission");
            self.permissions.request_location_permission();
            return Err(TrackerError::PermissionDenied);
        }
        if !self.source.is_location_enabled() {
            warn!("[RunController] Start refused: location service disabled");
            return Err(TrackerError::LocationDisabled);
        }

        self.session.start()?;
        let config = self.session.config();
        let request = config.location_request();
        let tick_interval_ms = config.tick_interval_ms;

        self.source.request_updates(&request);
        self.ticker.schedule(tick_interval_ms);

        self.view.reset_chart(self.session.chart().points());
        self.view.set_running(true);
        self.refresh_view();
        info!(
            "[RunController] Tracking every {}ms, ticking every {}ms",
            request.interval_ms, tick_interval_ms
        );
        Ok(())
    }

    fn stop(&mut self) -> Result<RunSummary> {
        self.source.remove_updates();
        self.ticker.cancel();
        let summary = self.session.stop()?;

        self.view.set_running(false);
        self.view.show_summary(&summary, &format_average(&summary));
        Ok(summary)
    }

    /// Location callback. Only the most recent sample of a batch is used.
    pub fn on_location_result(&mut self, samples: &[LocationSample]) {
        let Some(sample) = samples.last() else {
            return;
        };
        match self.session.on_location(sample) {
            Ok(update) => {
                if let Some(point) = update.chart_point {
                    self.view.push_chart_point(point);
                }
                self.refresh_view();
            }
            Err(TrackerError::NotRunning) => {
                debug!("[RunController] Dropping sample delivered after stop");
            }
            Err(e) => {
                warn!("[RunController] Sample rejected: {}", e);
            }
        }
    }

    /// Timer callback: advance the clock and refresh the elapsed field.
    pub fn on_tick(&mut self) {
        if let Some(elapsed) = self.session.on_tick() {
            self.view.show_elapsed(&format_elapsed(elapsed));
        }
    }

    fn refresh_view(&mut self) {
        let text = DisplayText::from_snapshot(&self.session.snapshot());
        self.view.show_metrics(&text);
    }

    pub fn session(&self) -> &RunSession {
        &self.session
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn permissions_mut(&mut self) -> &mut P {
        &mut self.permissions
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
