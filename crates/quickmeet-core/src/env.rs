//! Environment abstraction for deterministic testing.
//!
//! Decouples screen logic from system resources (randomness, wall clock).
//! Production uses the OS RNG and system time; simulation uses a seeded RNG
//! and a settable clock.

use rand::RngCore;

/// Abstract environment providing randomness and wall-clock time.
///
/// # Invariants
///
/// - Given the same seed, a simulation environment produces the same byte
///   sequence from [`Environment::random_bytes`].
/// - Methods are infallible. Production implementations may panic only on
///   OS-level failures.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Fills the provided buffer with random bytes.
    fn random_bytes(&self, buffer: &mut [u8]);

    /// Generates a random `u64`.
    fn random_u64(&self) -> u64 {
        let mut bytes = [0u8; 8];
        self.random_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    /// Seconds since the Unix epoch, used only for the clock display.
    fn wall_clock_secs(&self) -> u64;
}

/// Adapts an [`Environment`] to [`rand::RngCore`].
///
/// Lets the roster generator and meeting ID generator draw from the
/// environment's entropy through the ordinary `rand` API.
pub struct EnvRng<'a, E: Environment> {
    env: &'a E,
}

impl<'a, E: Environment> EnvRng<'a, E> {
    /// Borrow the environment as an RNG.
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }
}

impl<E: Environment> RngCore for EnvRng<'_, E> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.env.random_bytes(&mut bytes);
        u32::from_be_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        self.env.random_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.env.random_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.env.random_bytes(dest);
        Ok(())
    }
}
