//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the system at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use quickmeet_app::{App, LayoutMode, MeetingRoom, TimerId};
use quickmeet_core::Environment;

/// Snapshot of the App and, optionally, the host timers.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    /// Route path, e.g. `/` or `/meeting/abc123`.
    pub path: String,
    /// Meeting state. `None` on the landing screen.
    pub meeting: Option<MeetingSnapshot>,
    /// Live viewport subscriptions.
    pub viewport_listeners: usize,
    /// Hide timers armed on the host. `None` when no driver was observed.
    pub armed_timers: Option<Vec<TimerId>>,
}

impl SystemSnapshot {
    /// Snapshot of an App on the landing screen with no timers armed.
    pub fn landing() -> Self {
        Self { path: "/".to_string(), armed_timers: Some(Vec::new()), ..Self::default() }
    }

    /// Capture the App's observable state.
    pub fn from_app<E: Environment>(app: &App<E>) -> Self {
        Self {
            path: app.route().path(),
            meeting: app.meeting().map(MeetingSnapshot::from_room),
            viewport_listeners: app.viewport_listener_count(),
            armed_timers: None,
        }
    }

    /// Attach the host's armed timers.
    #[must_use]
    pub fn with_armed_timers(mut self, timers: impl IntoIterator<Item = TimerId>) -> Self {
        self.armed_timers = Some(timers.into_iter().collect());
        self
    }
}

/// Snapshot of a mounted meeting room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSnapshot {
    /// Controls drawn.
    pub controls_visible: bool,
    /// Pending hide expiry.
    pub pending_timer: Option<TimerId>,
    /// Video area layout.
    pub layout: LayoutMode,
    /// Roster size plus the local participant.
    pub participant_count: usize,
    /// Tiles drawn.
    pub tile_count: usize,
    /// First tile is the local participant.
    pub local_first: bool,
    /// Tiles drawn full size.
    pub focused_tiles: usize,
}

impl MeetingSnapshot {
    /// Capture a room's observable state.
    pub fn from_room(room: &MeetingRoom) -> Self {
        let tiles = room.tiles();
        Self {
            controls_visible: room.controls_visible(),
            pending_timer: room.pending_hide_timer(),
            layout: room.layout(),
            participant_count: room.participant_count(),
            tile_count: tiles.len(),
            local_first: tiles.first().is_some_and(|tile| tile.is_local()),
            focused_tiles: tiles.iter().filter(|tile| tile.focused).count(),
        }
    }
}
