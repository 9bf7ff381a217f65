//! Controls auto-hide timer.
//!
//! The meeting room owns exactly one [`HideTimer`]. The timer never sleeps
//! itself: it hands out [`TimerId`]s that the runtime arms on the host, and
//! the host reports expiries back by ID. Restarting always cancels the
//! previous ID first, so at most one expiry is live and a stale expiry can
//! never hide the controls.

use std::{fmt, time::Duration};

/// Inactivity period after which the meeting controls hide.
pub const CONTROLS_HIDE_DELAY: Duration = Duration::from_secs(5);

/// Identifier of one scheduled expiry.
///
/// Unique across meeting mounts within one [`crate::App`]: the mount epoch
/// keeps a leftover expiry from a previous meeting from matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId {
    mount: u64,
    seq: u64,
}

impl TimerId {
    /// Mount epoch the timer belongs to.
    pub fn mount(self) -> u64 {
        self.mount
    }

    /// Sequence number within the mount.
    pub fn seq(self) -> u64 {
        self.seq
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hide#{}.{}", self.mount, self.seq)
    }
}

/// Result of [`HideTimer::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRestart {
    /// Expiry that was pending before the restart.
    pub cancelled: Option<TimerId>,
    /// Newly scheduled expiry.
    pub scheduled: TimerId,
}

/// Owned handle to the single pending auto-hide expiry.
#[derive(Debug)]
pub struct HideTimer {
    mount: u64,
    next_seq: u64,
    pending: Option<TimerId>,
}

impl HideTimer {
    /// Create an idle timer for the given mount epoch.
    pub fn new(mount: u64) -> Self {
        Self { mount, next_seq: 0, pending: None }
    }

    /// Cancel the pending expiry, if any, and schedule a fresh one.
    pub fn restart(&mut self) -> TimerRestart {
        let cancelled = self.pending.take();
        self.next_seq += 1;
        let scheduled = TimerId { mount: self.mount, seq: self.next_seq };
        self.pending = Some(scheduled);
        TimerRestart { cancelled, scheduled }
    }

    /// Cancel the pending expiry. Returns the cancelled ID.
    pub fn cancel(&mut self) -> Option<TimerId> {
        self.pending.take()
    }

    /// Consume an expiry reported by the host.
    ///
    /// Returns `true` only for the live expiry; stale IDs leave the timer
    /// untouched.
    pub fn expire(&mut self, timer: TimerId) -> bool {
        if self.pending == Some(timer) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Currently pending expiry.
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }
}
