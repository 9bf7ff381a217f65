//! Observable meeting-room state types.
//!
//! These are the view-model pieces a frontend needs to draw the meeting
//! screen: the layout mode, the controls visibility and the tile set.

use quickmeet_core::{LOCAL_DISPLAY_NAME, LOCAL_INITIALS, Participant};

/// Video area layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    /// Local tile plus every roster tile.
    #[default]
    Grid,
    /// Local tile only, full size.
    Focus,
}

impl LayoutMode {
    /// The other layout.
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::Focus,
            Self::Focus => Self::Grid,
        }
    }
}

/// Controls visibility. A two-state debounce, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlsVisibility {
    /// Header, info badge and control bar are drawn.
    #[default]
    Visible,
    /// Hidden after inactivity.
    Hidden,
}

/// Whose video a tile shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileSubject<'a> {
    /// The local participant ("You").
    Local,
    /// A fabricated remote participant.
    Remote(&'a Participant),
}

/// One rendered video tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile<'a> {
    /// Whose tile this is.
    pub subject: TileSubject<'a>,
    /// Name label.
    pub name: &'a str,
    /// Initials shown when video is off.
    pub initials: &'a str,
    /// Muted indicator.
    pub muted: bool,
    /// Initials instead of a video placeholder.
    pub video_off: bool,
    /// Drawn full size (focus layout).
    pub focused: bool,
}

impl<'a> Tile<'a> {
    /// The local participant's tile.
    pub fn local(muted: bool, video_off: bool, focused: bool) -> Self {
        Self {
            subject: TileSubject::Local,
            name: LOCAL_DISPLAY_NAME,
            initials: LOCAL_INITIALS,
            muted,
            video_off,
            focused,
        }
    }

    /// A roster participant's tile.
    pub fn remote(participant: &'a Participant) -> Self {
        Self {
            subject: TileSubject::Remote(participant),
            name: participant.name(),
            initials: participant.initials(),
            muted: participant.is_muted(),
            video_off: participant.is_video_off(),
            focused: false,
        }
    }

    /// Whether this is the local tile.
    pub fn is_local(&self) -> bool {
        matches!(self.subject, TileSubject::Local)
    }
}
