//! Property-based tests for the screens under arbitrary input.
//!
//! Random key, pointer, resize and clock events are interleaved with virtual
//! time jumps and driven through the real [`Runtime`]. Every render is
//! checked against [`InvariantRegistry::standard`], so any sequence that
//! leaves two hide expiries armed, hides the controls without an expiry, or
//! leaks a viewport listener fails the property.

use std::time::Duration;

use proptest::prelude::*;
use quickmeet_app::{AppEvent, KeyInput, Runtime};
use quickmeet_core::Route;
use quickmeet_harness::{InvariantRegistry, SimDriver, SimEnv};

#[derive(Debug, Clone)]
enum Op {
    Event(AppEvent),
    Advance(Duration),
}

/// Keys that never quit the application.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        4 => prop::sample::select(vec!['m', 'v', 's', 'l', 'c', 'a', '7', ' ']).prop_map(KeyInput::Char),
        1 => Just(KeyInput::Char('e')),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Tab),
        1 => Just(KeyInput::Backspace),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => key_strategy().prop_map(|key| Op::Event(AppEvent::Key(key))),
        3 => Just(Op::Event(AppEvent::PointerMoved)),
        1 => (200u32..2_000).prop_map(|width_px| Op::Event(AppEvent::Resize { width_px })),
        1 => (0u64..10_000).prop_map(|secs| Op::Event(AppEvent::Clock { unix_secs: secs })),
        3 => (0u64..7_000).prop_map(|ms| Op::Advance(Duration::from_millis(ms))),
    ]
}

fn run_ops(seed: u64, start: Route, ops: Vec<Op>) -> Result<SimDriverStats, String> {
    let rt = tokio::runtime::Builder::new_current_thread().build().map_err(|e| e.to_string())?;
    rt.block_on(drive(seed, start, ops))
}

async fn drive(seed: u64, start: Route, ops: Vec<Op>) -> Result<SimDriverStats, String> {
    let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
    let mut runtime = Runtime::new(driver, SimEnv::with_seed(seed), 1024, start);
    runtime.start().map_err(|e| e.to_string())?;

    for op in ops {
        match op {
            Op::Event(event) => runtime.driver().inject_event(event),
            Op::Advance(by) => runtime.driver().advance(by),
        }
        while runtime.driver().has_pending() {
            if !runtime.step().await.map_err(|e| e.to_string())? {
                return Err("runtime stopped unexpectedly".to_string());
            }
        }
    }

    Ok(SimDriverStats {
        max_armed: runtime.driver().max_armed(),
        armed_now: runtime.driver().armed_timers().len(),
        in_meeting: runtime.app().meeting().is_some(),
    })
}

struct SimDriverStats {
    max_armed: usize,
    armed_now: usize,
    in_meeting: bool,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_invariants_hold_from_landing(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let stats = run_ops(seed, Route::Landing, ops);
        prop_assert!(stats.is_ok(), "{:?}", stats.err());
    }

    #[test]
    fn prop_at_most_one_expiry_armed(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..60),
    ) {
        let start: Route = "/meeting/prop".parse().map_err(|e| TestCaseError::fail(format!("{e}")))?;
        let stats = run_ops(seed, start, ops).map_err(TestCaseError::fail)?;

        prop_assert!(stats.max_armed <= 1);
        if !stats.in_meeting {
            prop_assert_eq!(stats.armed_now, 0);
        }
    }
}
