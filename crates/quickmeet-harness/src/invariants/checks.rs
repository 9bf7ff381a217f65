//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use quickmeet_app::LayoutMode;

use super::{Invariant, InvariantKind, InvariantResult, SystemSnapshot, Violation};

/// Controls are visible exactly while a hide expiry is pending.
///
/// Showing the controls always schedules an expiry and the expiry is the
/// only way to hide them, so the two can never disagree.
pub struct ControlsTimerConsistency;

impl Invariant for ControlsTimerConsistency {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ControlsTimerConsistency
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let Some(meeting) = &state.meeting else {
            return Ok(());
        };

        if meeting.controls_visible != meeting.pending_timer.is_some() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "controls_visible={} but pending_timer={:?}",
                    meeting.controls_visible, meeting.pending_timer
                ),
            });
        }
        Ok(())
    }
}

/// At most one hide expiry is armed on the host, and it is the one the
/// meeting considers live.
///
/// Skipped when the snapshot carries no host timer view.
pub struct SingleLiveTimer;

impl Invariant for SingleLiveTimer {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SingleLiveTimer
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let Some(armed) = &state.armed_timers else {
            return Ok(());
        };

        let expected: Vec<_> =
            state.meeting.as_ref().and_then(|meeting| meeting.pending_timer).into_iter().collect();

        if *armed != expected {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("host armed {armed:?}, app expects {expected:?}"),
            });
        }
        Ok(())
    }
}

/// Grid shows every participant with the local tile first; focus shows the
/// local tile alone, full size.
pub struct LayoutTiles;

impl Invariant for LayoutTiles {
    fn kind(&self) -> InvariantKind {
        InvariantKind::LayoutTiles
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let Some(meeting) = &state.meeting else {
            return Ok(());
        };

        let (expected_tiles, expected_focused) = match meeting.layout {
            LayoutMode::Grid => (meeting.participant_count, 0),
            LayoutMode::Focus => (1, 1),
        };

        if meeting.tile_count != expected_tiles
            || meeting.focused_tiles != expected_focused
            || !meeting.local_first
        {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "{:?}: {} tiles ({} focused, local_first={}), expected {} ({} focused)",
                    meeting.layout,
                    meeting.tile_count,
                    meeting.focused_tiles,
                    meeting.local_first,
                    expected_tiles,
                    expected_focused
                ),
            });
        }
        Ok(())
    }
}

/// Exactly one viewport listener while a meeting is mounted, none otherwise.
pub struct ViewportScoped;

impl Invariant for ViewportScoped {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ViewportScoped
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let expected = usize::from(state.meeting.is_some());
        if state.viewport_listeners != expected {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "{} viewport listeners on {}, expected {expected}",
                    state.viewport_listeners, state.path
                ),
            });
        }
        Ok(())
    }
}

/// `/meeting/<id>` routes show the meeting screen; `/` shows the landing
/// screen.
pub struct RouteMatchesScreen;

impl Invariant for RouteMatchesScreen {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RouteMatchesScreen
    }

    fn check(&self, state: &SystemSnapshot) -> InvariantResult {
        let on_meeting_path = state.path.starts_with("/meeting/");
        if on_meeting_path != state.meeting.is_some() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "path {} with meeting mounted={}",
                    state.path,
                    state.meeting.is_some()
                ),
            });
        }
        Ok(())
    }
}
