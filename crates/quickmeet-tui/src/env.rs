//! Production Environment implementation using the system clock and OS RNG.
//!
//! `SystemEnv` is the production implementation of the Environment trait.
//! Meeting IDs and participant flags are truly random and not reproducible;
//! simulation uses a seeded environment instead.

use std::time::{SystemTime, UNIX_EPOCH};

use quickmeet_core::Environment;

/// Production environment using the system clock and OS randomness.
///
/// # Panics
///
/// Panics if the OS RNG fails. RNG failure is extremely rare and indicates
/// an OS-level problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    #[allow(clippy::expect_used)]
    fn random_bytes(&self, buffer: &mut [u8]) {
        getrandom::fill(buffer).expect("invariant: OS RNG failure is unrecoverable");
    }

    #[allow(clippy::disallowed_methods)]
    fn wall_clock_secs(&self) -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_secs())
    }
}
