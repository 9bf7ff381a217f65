//! Meeting-room state controller.
//!
//! This module defines [`MeetingRoom`], the single mutable record behind the
//! meeting screen. Every operation is a pure state transition returning
//! [`AppAction`]s; the only scheduled work is the controls auto-hide expiry,
//! which the runtime arms on the host.
//!
//! # Responsibilities
//!
//! - Independent mute, video-off and screen-share toggles.
//! - Grid/focus layout. Focus degenerates to the local tile alone.
//! - Chat sidebar visibility.
//! - Controls auto-hide after [`CONTROLS_HIDE_DELAY`] without pointer
//!   activity.
//! - Mobile/desktop viewport class from the subscribed window width.

use quickmeet_core::{CANNED_TRANSCRIPT, ChatMessage, MeetingId, Roster, ViewportClass};

use crate::{
    AppAction, CONTROLS_HIDE_DELAY, ControlsVisibility, HideTimer, LayoutMode, Tile, TimerId,
    ViewportSubscription,
};

/// Meeting-room UI state.
///
/// Created on mount, dropped on navigation away. Dropping releases the
/// viewport subscription; [`MeetingRoom::end_call`] additionally cancels the
/// pending hide expiry.
#[derive(Debug)]
pub struct MeetingRoom {
    /// Identifier shown in the header.
    meeting_id: MeetingId,
    /// Fabricated remote participants, fixed at mount.
    roster: Roster,
    /// Local microphone toggle.
    muted: bool,
    /// Local camera toggle.
    video_off: bool,
    /// Screen-share toggle.
    screen_sharing: bool,
    /// Video area layout.
    layout: LayoutMode,
    /// Controls visibility.
    controls: ControlsVisibility,
    /// Chat sidebar visibility.
    chat_open: bool,
    /// Derived from the subscribed window width.
    viewport: ViewportClass,
    /// Window-width listener, released on drop.
    viewport_subscription: ViewportSubscription,
    /// Single pending auto-hide expiry.
    hide_timer: HideTimer,
    /// Last wall-clock reading. `None` until the first clock event.
    clock_secs: Option<u64>,
}

impl MeetingRoom {
    /// Mount a meeting room.
    ///
    /// Reads the current width from the subscription and schedules the
    /// initial auto-hide expiry. The returned actions arm that expiry.
    pub fn mount(
        meeting_id: MeetingId,
        roster: Roster,
        viewport_subscription: ViewportSubscription,
        mount_epoch: u64,
    ) -> (Self, Vec<AppAction>) {
        let viewport = ViewportClass::from_width(viewport_subscription.width_px());
        let mut room = Self {
            meeting_id,
            roster,
            muted: false,
            video_off: false,
            screen_sharing: false,
            layout: LayoutMode::Grid,
            controls: ControlsVisibility::Visible,
            chat_open: false,
            viewport,
            viewport_subscription,
            hide_timer: HideTimer::new(mount_epoch),
            clock_secs: None,
        };

        let actions = room.restart_hide_timer();
        (room, actions)
    }

    /// Flip the local mute flag.
    pub fn toggle_mute(&mut self) -> Vec<AppAction> {
        self.muted = !self.muted;
        vec![AppAction::Render]
    }

    /// Flip the local video-off flag.
    pub fn toggle_video(&mut self) -> Vec<AppAction> {
        self.video_off = !self.video_off;
        vec![AppAction::Render]
    }

    /// Flip screen sharing. Independent of mute and video.
    pub fn toggle_screen_share(&mut self) -> Vec<AppAction> {
        self.screen_sharing = !self.screen_sharing;
        vec![AppAction::Render]
    }

    /// Switch between grid and focus layout.
    pub fn toggle_layout(&mut self) -> Vec<AppAction> {
        self.layout = self.layout.toggled();
        vec![AppAction::Render]
    }

    /// Open or close the chat sidebar.
    pub fn toggle_chat(&mut self) -> Vec<AppAction> {
        self.chat_open = !self.chat_open;
        vec![AppAction::Render]
    }

    /// Abandon the meeting.
    ///
    /// Consumes the room: nothing is saved. Returns the cancellation of the
    /// pending expiry, if any. The caller navigates back to the landing
    /// screen.
    pub fn end_call(mut self) -> Vec<AppAction> {
        tracing::debug!(meeting_id = %self.meeting_id, "ending call");
        self.hide_timer
            .cancel()
            .map(|timer| AppAction::CancelHideControls { timer })
            .into_iter()
            .collect()
    }

    /// Pointer moved: show the controls and restart the inactivity timer.
    pub fn on_pointer_activity(&mut self) -> Vec<AppAction> {
        let was_hidden = self.controls == ControlsVisibility::Hidden;
        self.controls = ControlsVisibility::Visible;

        let mut actions = self.restart_hide_timer();
        if was_hidden {
            actions.push(AppAction::Render);
        }
        actions
    }

    /// A host timer fired. Hides the controls only if `timer` is the live
    /// expiry.
    pub fn on_controls_timer_expired(&mut self, timer: TimerId) -> Vec<AppAction> {
        if !self.hide_timer.expire(timer) {
            tracing::trace!(%timer, "ignoring stale hide expiry");
            return vec![];
        }

        self.controls = ControlsVisibility::Hidden;
        vec![AppAction::Render]
    }

    /// Reclassify the viewport from a window width.
    pub fn on_resize(&mut self, width_px: u32) -> Vec<AppAction> {
        self.viewport = ViewportClass::from_width(width_px);
        vec![AppAction::Render]
    }

    /// Apply a width published since the last sync, if any.
    pub fn sync_viewport(&mut self) -> Vec<AppAction> {
        match self.viewport_subscription.take_change() {
            Some(width_px) => self.on_resize(width_px),
            None => vec![],
        }
    }

    /// Update the header clock. Renders only when the minute changes.
    pub fn on_clock(&mut self, unix_secs: u64) -> Vec<AppAction> {
        let minute_changed = self.clock_secs.map(|secs| secs / 60) != Some(unix_secs / 60);
        self.clock_secs = Some(unix_secs);
        if minute_changed { vec![AppAction::Render] } else { vec![] }
    }

    /// Tiles to draw: local first, then the roster in grid layout; the local
    /// tile alone in focus layout.
    pub fn tiles(&self) -> Vec<Tile<'_>> {
        match self.layout {
            LayoutMode::Focus => vec![Tile::local(self.muted, self.video_off, true)],
            LayoutMode::Grid => std::iter::once(Tile::local(self.muted, self.video_off, false))
                .chain(self.roster.iter().map(Tile::remote))
                .collect(),
        }
    }

    /// Roster size plus the local participant.
    pub fn participant_count(&self) -> usize {
        self.roster.len() + 1
    }

    fn restart_hide_timer(&mut self) -> Vec<AppAction> {
        let restart = self.hide_timer.restart();
        tracing::trace!(timer = %restart.scheduled, "scheduling controls hide");

        let mut actions = Vec::with_capacity(2);
        if let Some(timer) = restart.cancelled {
            actions.push(AppAction::CancelHideControls { timer });
        }
        actions.push(AppAction::ScheduleHideControls {
            timer: restart.scheduled,
            after: CONTROLS_HIDE_DELAY,
        });
        actions
    }

    /// Identifier shown in the header.
    pub fn meeting_id(&self) -> &MeetingId {
        &self.meeting_id
    }

    /// Fabricated remote participants.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Local mute flag.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Local video-off flag.
    pub fn is_video_off(&self) -> bool {
        self.video_off
    }

    /// Screen-share flag.
    pub fn is_screen_sharing(&self) -> bool {
        self.screen_sharing
    }

    /// Current layout.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Controls visibility.
    pub fn controls(&self) -> ControlsVisibility {
        self.controls
    }

    /// Whether the controls are drawn.
    pub fn controls_visible(&self) -> bool {
        self.controls == ControlsVisibility::Visible
    }

    /// Whether the chat sidebar is open.
    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    /// Current viewport class.
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Pending auto-hide expiry. `None` once the controls have hidden.
    pub fn pending_hide_timer(&self) -> Option<TimerId> {
        self.hide_timer.pending()
    }

    /// Canned chat transcript.
    pub fn transcript(&self) -> &'static [ChatMessage] {
        &CANNED_TRANSCRIPT
    }

    /// Last wall-clock reading. `None` until the first clock event.
    pub fn clock_secs(&self) -> Option<u64> {
        self.clock_secs
    }
}
