//! Core domain types for QuickMeet.
//!
//! Everything in this crate is fabricated locally: the participant roster,
//! meeting identifiers and the chat transcript. Nothing here performs I/O.
//! Randomness and wall-clock time reach the domain only through the
//! [`Environment`](env::Environment) trait so simulations stay reproducible.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod chat;
pub mod env;
pub mod error;
pub mod meeting_id;
pub mod participant;
pub mod roster;
pub mod route;
pub mod viewport;

pub use chat::{CANNED_TRANSCRIPT, CHAT_INPUT_PLACEHOLDER, ChatMessage};
pub use env::{EnvRng, Environment};
pub use error::RouteError;
pub use meeting_id::MeetingId;
pub use participant::{LOCAL_DISPLAY_NAME, LOCAL_INITIALS, Participant, ParticipantId};
pub use roster::{NAME_POOL, Roster};
pub use route::Route;
pub use viewport::{MOBILE_BREAKPOINT_PX, ViewportClass};
