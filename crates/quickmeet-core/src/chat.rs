//! Canned chat transcript shown in the meeting sidebar.

use crate::participant::LOCAL_DISPLAY_NAME;

/// Placeholder of the display-only chat input.
pub const CHAT_INPUT_PLACEHOLDER: &str = "Type a message...";

/// A static chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    /// Display name of the author.
    pub sender: &'static str,
    /// Message text.
    pub body: &'static str,
    /// Preformatted send time.
    pub sent_at: &'static str,
}

impl ChatMessage {
    /// Whether the local participant wrote this message.
    pub fn is_local(&self) -> bool {
        self.sender == LOCAL_DISPLAY_NAME
    }
}

/// The sidebar transcript. Nothing is ever appended.
pub const CANNED_TRANSCRIPT: [ChatMessage; 3] = [
    ChatMessage {
        sender: LOCAL_DISPLAY_NAME,
        body: "Hi everyone, can you all hear me?",
        sent_at: "10:45 AM",
    },
    ChatMessage { sender: "Alex Kim", body: "Yes, loud and clear!", sent_at: "10:46 AM" },
    ChatMessage {
        sender: "Taylor Smith",
        body: "I'm having some audio issues, give me a minute.",
        sent_at: "10:47 AM",
    },
];
