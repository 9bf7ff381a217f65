//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from the App (and, when a
//! [`crate::SimDriver`] is involved, the host timers it has armed) into a
//! [`SystemSnapshot`], then runs registered [`Invariant`] checks against it.
//! Violations are returned with context for debugging.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = SystemSnapshot::from_app(&app);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    ControlsTimerConsistency, LayoutTiles, RouteMatchesScreen, SingleLiveTimer, ViewportScoped,
};
pub use snapshot::{MeetingSnapshot, SystemSnapshot};

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Identifies which invariant was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantKind {
    /// Controls are visible exactly while a hide expiry is pending.
    ControlsTimerConsistency,
    /// At most one hide expiry armed on the host, and it is the live one.
    SingleLiveTimer,
    /// Grid shows everyone local-first; focus shows the local tile alone.
    LayoutTiles,
    /// Exactly one viewport listener while a meeting is mounted.
    ViewportScoped,
    /// The route and the active screen agree.
    RouteMatchesScreen,
}

impl std::fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ControlsTimerConsistency => "controls_timer_consistency",
            Self::SingleLiveTimer => "single_live_timer",
            Self::LayoutTiles => "layout_tiles",
            Self::ViewportScoped => "viewport_scoped",
            Self::RouteMatchesScreen => "route_matches_screen",
        };
        f.write_str(name)
    }
}

/// Invariant violation with context.
#[derive(Debug, Clone)]
pub struct Violation {
    /// Which invariant was violated.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against system state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Which invariant this is.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &SystemSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against system state.
/// Use [`InvariantRegistry::standard()`] for the common screen invariants.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.kind())).finish()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard screen invariants.
    ///
    /// Includes:
    /// - [`ControlsTimerConsistency`]: controls visible iff expiry pending
    /// - [`SingleLiveTimer`]: host timers agree with the pending expiry
    /// - [`LayoutTiles`]: tile set matches the layout
    /// - [`ViewportScoped`]: one viewport listener per mounted meeting
    /// - [`RouteMatchesScreen`]: route and screen agree
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ControlsTimerConsistency);
        registry.add(SingleLiveTimer);
        registry.add(LayoutTiles);
        registry.add(ViewportScoped);
        registry.add(RouteMatchesScreen);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &SystemSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
