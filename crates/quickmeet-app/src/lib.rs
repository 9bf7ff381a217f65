//! Application layer for QuickMeet
//!
//! Pure state machines and a generic runtime for the landing and meeting
//! screens, so the same code runs in the terminal frontend and in
//! deterministic simulation.
//!
//! # Components
//!
//! - [`App`]: screen router (landing ↔ meeting) consuming [`AppEvent`]s
//! - [`LandingScreen`]: meeting-ID entry, create and join
//! - [`MeetingRoom`]: meeting-room UI state controller
//! - [`HideTimer`]: owned handle for the controls auto-hide expiry
//! - [`ViewportSignal`]: window-width publisher with scoped subscriptions
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod landing;
mod meeting;
mod runtime;
mod state;
mod timer;
mod viewport;

pub use action::AppAction;
pub use app::{App, Screen};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use landing::LandingScreen;
pub use meeting::MeetingRoom;
pub use runtime::Runtime;
pub use state::{ControlsVisibility, LayoutMode, Tile, TileSubject};
pub use timer::{CONTROLS_HIDE_DELAY, HideTimer, TimerId, TimerRestart};
pub use viewport::{ViewportSignal, ViewportSubscription};
