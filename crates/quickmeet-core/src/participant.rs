//! Fabricated meeting participants.

/// Roster-unique participant identifier (1-based).
pub type ParticipantId = u32;

/// Display name of the local participant tile.
pub const LOCAL_DISPLAY_NAME: &str = "You";

/// Initials shown when the local participant's video is off.
pub const LOCAL_INITIALS: &str = "YO";

/// A fabricated remote participant.
///
/// The muted and video-off flags are display seeds chosen at generation
/// time. There are no setters: once generated they never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: ParticipantId,
    name: &'static str,
    muted: bool,
    video_off: bool,
    initials: String,
}

impl Participant {
    /// Create a participant. Initials are derived from `name`.
    pub fn new(id: ParticipantId, name: &'static str, muted: bool, video_off: bool) -> Self {
        Self { id, name, muted, video_off, initials: initials(name) }
    }

    /// Roster-unique identifier.
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the tile shows a muted indicator.
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether the tile shows initials instead of a video placeholder.
    pub fn is_video_off(&self) -> bool {
        self.video_off
    }

    /// First letter of each whitespace-separated name token.
    pub fn initials(&self) -> &str {
        &self.initials
    }
}

/// First character of each whitespace-separated token, concatenated.
pub fn initials(name: &str) -> String {
    name.split_whitespace().filter_map(|token| token.chars().next()).collect()
}
