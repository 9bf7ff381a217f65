//! Error types for the QuickMeet domain.
//!
//! The screen state machines are infallible. Errors only arise when text from
//! outside (a command-line path) is turned into a [`crate::Route`].

use thiserror::Error;

/// Failure to parse a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Path matches neither `/` nor `/meeting/<id>`.
    #[error("unknown path: {0}")]
    UnknownPath(String),

    /// Meeting path without a usable identifier.
    #[error("meeting path has an empty identifier")]
    EmptyMeetingId,
}
