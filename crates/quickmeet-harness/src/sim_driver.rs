//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`quickmeet_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Host timers run on a virtual clock. Nothing fires until the test calls
//! [`SimDriver::advance`], which queues an expiry event for every timer whose
//! deadline has passed, in deadline order.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use quickmeet_app::{App, AppEvent, Driver, TimerId};
use quickmeet_core::Environment;

use crate::invariants::{InvariantRegistry, SystemSnapshot};

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// Shared state for event injection.
///
/// This allows injection from outside async contexts.
#[derive(Debug, Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    /// Virtual time since the driver was created.
    now: Duration,
    /// Armed timers with their virtual deadlines.
    armed: Vec<(TimerId, Duration)>,
    /// Most timers ever armed at once.
    max_armed: usize,
    renders: usize,
    last_snapshot: Option<SystemSnapshot>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`quickmeet_app::Runtime`]
/// orchestration code runs in both the terminal frontend and simulation
/// tests.
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<InvariantRegistry>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// Move virtual time forward, queueing an expiry for every timer due by
    /// the new time.
    pub fn advance(&self, by: Duration) {
        let mut state = self.lock();
        state.now += by;
        let now = state.now;

        let mut due: Vec<_> =
            state.armed.iter().copied().filter(|(_, deadline)| *deadline <= now).collect();
        due.sort_by_key(|(timer, deadline)| (*deadline, *timer));
        state.armed.retain(|(_, deadline)| *deadline > now);

        for (timer, _) in due {
            tracing::trace!(%timer, "sim timer fired");
            state.pending_events.push_back(AppEvent::ControlsTimerExpired { timer });
        }
    }

    /// Virtual time since the driver was created.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Timers currently armed, in arming order.
    pub fn armed_timers(&self) -> Vec<TimerId> {
        self.lock().armed.iter().map(|(timer, _)| *timer).collect()
    }

    /// Most timers that were ever armed at the same time.
    pub fn max_armed(&self) -> usize {
        self.lock().max_armed
    }

    /// Number of frames rendered.
    pub fn render_count(&self) -> usize {
        self.lock().renders
    }

    /// Snapshot taken at the last render.
    pub fn last_snapshot(&self) -> Option<SystemSnapshot> {
        self.lock().last_snapshot.clone()
    }

    /// Whether [`Driver::stop`] was called.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    /// Create a snapshot from App state and the armed host timers.
    pub fn snapshot_from_app<E: Environment>(&self, app: &App<E>) -> SystemSnapshot {
        SystemSnapshot::from_app(app).with_armed_timers(self.armed_timers())
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        let mut state = self.lock();
        if state.stopped {
            return Err(SimDriverError("poll after stop".to_string()));
        }
        Ok(state.pending_events.pop_front())
    }

    fn schedule_timer(&mut self, timer: TimerId, after: Duration) {
        let mut state = self.lock();
        let deadline = state.now + after;
        state.armed.retain(|(armed, _)| *armed != timer);
        state.armed.push((timer, deadline));
        state.max_armed = state.max_armed.max(state.armed.len());
    }

    fn cancel_timer(&mut self, timer: TimerId) {
        self.lock().armed.retain(|(armed, _)| *armed != timer);
    }

    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error> {
        let snapshot = self.snapshot_from_app(app);
        if let Some(ref registry) = self.invariants {
            registry.check_all(&snapshot).map_err(|violations| {
                let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
                SimDriverError(messages.join("; "))
            })?;
        }

        let mut state = self.lock();
        state.renders += 1;
        state.last_snapshot = Some(snapshot);
        Ok(())
    }

    fn stop(&mut self) {
        let mut state = self.lock();
        state.armed.clear();
        state.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use quickmeet_app::{AppAction, CONTROLS_HIDE_DELAY, KeyInput};

    use super::*;
    use crate::SimEnv;

    fn meeting_app() -> (App<SimEnv>, TimerId) {
        let mut app = App::new(SimEnv::with_seed(1), 1024);
        let actions = app.navigate("/meeting/sim".parse().expect("valid path"));
        let timer = actions
            .iter()
            .find_map(|a| match a {
                AppAction::ScheduleHideControls { timer, .. } => Some(*timer),
                _ => None,
            })
            .expect("mount schedules hide");
        (app, timer)
    }

    #[test]
    fn inject_event_queues_event() {
        let driver = SimDriver::new();
        driver.inject_event(AppEvent::Key(KeyInput::Char('m')));

        assert!(driver.has_pending());
    }

    #[test]
    fn timer_fires_at_deadline_not_before() {
        let (_, timer) = meeting_app();
        let mut driver = SimDriver::new();
        driver.schedule_timer(timer, CONTROLS_HIDE_DELAY);

        driver.advance(CONTROLS_HIDE_DELAY - Duration::from_millis(1));
        assert!(!driver.has_pending());

        driver.advance(Duration::from_millis(1));
        assert!(driver.armed_timers().is_empty());
        assert!(driver.has_pending());
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let (_, timer) = meeting_app();
        let mut driver = SimDriver::new();
        driver.schedule_timer(timer, CONTROLS_HIDE_DELAY);
        driver.cancel_timer(timer);

        driver.advance(CONTROLS_HIDE_DELAY * 2);
        assert!(!driver.has_pending());
        assert_eq!(driver.max_armed(), 1);
    }

    #[tokio::test]
    async fn poll_event_returns_injected_event() {
        let mut driver = SimDriver::new();
        driver.inject_event(AppEvent::PointerMoved);

        let event = driver.poll_event().await.expect("driver running");
        assert_eq!(event, Some(AppEvent::PointerMoved));
        assert_eq!(driver.poll_event().await.expect("driver running"), None);
    }

    #[tokio::test]
    async fn stop_disarms_timers_and_rejects_polls() {
        let (_, timer) = meeting_app();
        let mut driver = SimDriver::new();
        driver.schedule_timer(timer, CONTROLS_HIDE_DELAY);
        driver.inject_event(AppEvent::PointerMoved);

        driver.stop();

        assert!(driver.is_stopped());
        assert!(driver.armed_timers().is_empty());
        assert!(driver.poll_event().await.is_err());
    }

    #[test]
    fn render_records_last_snapshot() {
        let app = App::new(SimEnv::with_seed(1), 1024);
        let mut driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
        assert!(driver.last_snapshot().is_none());

        driver.render(&app).expect("landing satisfies invariants");

        let snapshot = driver.last_snapshot().expect("rendered");
        assert_eq!(snapshot.path, "/");
        assert!(snapshot.meeting.is_none());
        assert_eq!(driver.render_count(), 1);
    }

    #[test]
    fn render_with_invariants_rejects_unarmed_expiry() {
        let (app, _) = meeting_app();
        let mut driver = SimDriver::new().with_invariants(InvariantRegistry::standard());

        assert!(driver.render(&app).is_err());
        assert_eq!(driver.render_count(), 0);
    }
}
