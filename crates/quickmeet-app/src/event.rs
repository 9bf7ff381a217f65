//! Application input events.
//!
//! This module defines [`AppEvent`], the full set of inputs that drive the
//! [`crate::App`] state machine. Events come from the host: keyboard and
//! pointer input, window resizes, timer expiries and clock ticks.

use crate::{KeyInput, TimerId};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Pointer moved over the meeting screen.
    PointerMoved,

    /// Host window resized.
    Resize {
        /// New width in pixels.
        width_px: u32,
    },

    /// A host timer armed by
    /// [`crate::AppAction::ScheduleHideControls`] fired.
    ControlsTimerExpired {
        /// Handle the timer was armed with.
        timer: TimerId,
    },

    /// Wall-clock reading for the meeting header clock.
    Clock {
        /// Seconds since the Unix epoch.
        unix_secs: u64,
    },
}
