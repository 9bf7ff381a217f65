//! Deterministic simulation harness for QuickMeet.
//!
//! Seeded implementations of the Environment and Driver traits for
//! deterministic, reproducible testing of the landing and meeting screens.
//! Host timers run on a virtual clock that only moves when a test advances
//! it.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the common
//! screen invariants.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    ControlsTimerConsistency, Invariant, InvariantKind, InvariantRegistry, InvariantResult,
    LayoutTiles, MeetingSnapshot, RouteMatchesScreen, SingleLiveTimer, SystemSnapshot,
    ViewportScoped, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError};
pub use sim_env::SimEnv;
