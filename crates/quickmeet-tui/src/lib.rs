//! Terminal UI for QuickMeet
//!
//! A thin shell over [`quickmeet_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`quickmeet_app::Runtime`]
//!
//! This crate only handles terminal events, host timers and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod env;
pub mod logging;
pub mod terminal;
pub mod ui;

pub use cli::{Args, CliError};
pub use env::SystemEnv;
pub use quickmeet_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
