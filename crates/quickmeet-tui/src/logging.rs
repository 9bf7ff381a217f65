//! Tracing setup.
//!
//! The UI owns the terminal, so log output goes to a file. `RUST_LOG`
//! overrides the configured level.

use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::CliError;

/// Install the global subscriber writing to `log_file`.
pub fn init(log_file: &Path, level: &str) -> Result<(), CliError> {
    let file = File::create(log_file)
        .map_err(|source| CliError::LogFile { path: log_file.to_path_buf(), source })?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .try_init()?;

    Ok(())
}
