//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use std::time::Duration;

use quickmeet_core::Route;

use crate::TimerId;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Arm a host timer that reports back with
    /// [`crate::AppEvent::ControlsTimerExpired`].
    ScheduleHideControls {
        /// Expiry handle to report back.
        timer: TimerId,
        /// Delay from now.
        after: Duration,
    },

    /// Disarm a previously scheduled host timer.
    CancelHideControls {
        /// Expiry handle to disarm.
        timer: TimerId,
    },

    /// The active screen changed.
    Navigated(Route),
}
