//! Command-line arguments.

use std::{io, path::PathBuf};

use clap::Parser;
use quickmeet_core::{MeetingId, Route};
use thiserror::Error;

/// Pixel width assumed for one terminal column.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

/// Invalid startup configuration.
#[derive(Debug, Error)]
pub enum CliError {
    /// `--meeting` was given but is blank after trimming.
    #[error("meeting ID must not be blank")]
    BlankMeetingId,

    /// `--cell-width` was zero.
    #[error("cell width must be at least 1 pixel")]
    ZeroCellWidth,

    /// The log file could not be created.
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        /// Requested log file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A global tracing subscriber was already installed.
    #[error("logging already initialized: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// QuickMeet terminal client
#[derive(Parser, Debug, Clone)]
#[command(name = "quickmeet")]
#[command(about = "Terminal mockup of a video meeting room")]
#[command(version)]
pub struct Args {
    /// Start directly in this meeting instead of the landing screen
    #[arg(short, long)]
    pub meeting: Option<String>,

    /// Pixel width of one terminal column
    ///
    /// Window width in pixels is the column count times this value. It
    /// decides when the meeting switches to the mobile layout.
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH_PX)]
    pub cell_width: u32,

    /// File receiving log output (the terminal is occupied by the UI)
    #[arg(long, default_value = "quickmeet.log")]
    pub log_file: PathBuf,

    /// Log level (overridden by `RUST_LOG`)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Reject values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.cell_width == 0 {
            return Err(CliError::ZeroCellWidth);
        }
        Ok(())
    }

    /// Route to open first.
    pub fn initial_route(&self) -> Result<Route, CliError> {
        match &self.meeting {
            None => Ok(Route::Landing),
            Some(raw) => MeetingId::from_input(raw).map(Route::Meeting).ok_or(CliError::BlankMeetingId),
        }
    }
}
