//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific I/O, while the generic [`crate::Runtime`] handles all
//! orchestration.

use std::{future::Future, time::Duration};

use quickmeet_core::Environment;

use crate::{App, AppEvent, TimerId};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in the terminal frontend and simulation.
///
/// # Implementations
///
/// - **TUI**: crossterm events, tokio sleeps for hide timers
/// - **Simulation**: scripted events and a virtual clock
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input event.
    ///
    /// Armed hide timers are reported here as
    /// [`AppEvent::ControlsTimerExpired`]. Returns `None` once the input
    /// source is closed.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Arm a one-shot timer that fires `timer` after `after`.
    fn schedule_timer(&mut self, timer: TimerId, after: Duration);

    /// Disarm `timer`. Unknown or already-fired timers are ignored.
    fn cancel_timer(&mut self, timer: TimerId);

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render<E: Environment>(&mut self, app: &App<E>) -> Result<(), Self::Error>;

    /// Disarm all timers and restore the host.
    fn stop(&mut self);
}
