//! Landing screen state machine.
//!
//! Owns the meeting-ID text field. Creating a meeting generates a fresh
//! identifier; joining only checks that the field is non-empty after
//! trimming and is otherwise a silent no-op.

use quickmeet_core::{MeetingId, Route};
use rand::Rng;

/// Landing screen state.
///
/// Manages the meeting-ID input buffer and cursor position. The cursor is a
/// character index, not a byte offset.
#[derive(Debug, Clone, Default)]
pub struct LandingScreen {
    /// Text typed into the meeting-ID field.
    input: String,
    /// Cursor position within the field, in characters.
    cursor: usize,
}

impl LandingScreen {
    /// Create an empty landing screen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current field contents.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor.
    pub fn insert(&mut self, c: char) {
        let offset = self.byte_offset(self.cursor);
        self.input.insert(offset, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let offset = self.byte_offset(self.cursor);
            self.input.remove(offset);
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let offset = self.byte_offset(self.cursor);
            self.input.remove(offset);
        }
    }

    /// Move the cursor one character left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Route to a freshly generated meeting.
    pub fn create_meeting<R: Rng>(&self, rng: &mut R) -> Route {
        Route::Meeting(MeetingId::generate(rng))
    }

    /// Route to the typed meeting. `None` if the field is blank.
    pub fn join_meeting(&self) -> Option<Route> {
        MeetingId::from_input(&self.input).map(Route::Meeting)
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input.char_indices().nth(char_index).map_or(self.input.len(), |(offset, _)| offset)
    }
}
