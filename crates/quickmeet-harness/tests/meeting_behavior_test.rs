//! End-to-end tests for meeting-screen behavior.
//!
//! # Test Strategy
//!
//! Each test drives the real [`Runtime`] over a [`SimDriver`]:
//! 1. Start at a route
//! 2. Inject keys, pointer moves and resizes
//! 3. Advance virtual time to fire hide timers
//! 4. Verify App state matches the expected screen
//!
//! Every render is checked against [`InvariantRegistry::standard`].

use std::time::Duration;

use quickmeet_app::{AppEvent, KeyInput, LayoutMode, Runtime};
use quickmeet_core::Route;
use quickmeet_harness::{InvariantRegistry, SimDriver, SimEnv};

type SimRuntime = Runtime<SimDriver, SimEnv>;

fn runtime_at(path: &str) -> SimRuntime {
    let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
    let route: Route = path.parse().expect("valid path");
    let mut runtime = Runtime::new(driver, SimEnv::with_seed(42), 1024, route);
    assert!(runtime.start().expect("initial render"));
    runtime
}

/// Process every queued event.
async fn pump(runtime: &mut SimRuntime) {
    while runtime.driver().has_pending() {
        assert!(runtime.step().await.expect("driver running"));
    }
}

async fn send(runtime: &mut SimRuntime, event: AppEvent) {
    runtime.driver().inject_event(event);
    pump(runtime).await;
}

async fn type_text(runtime: &mut SimRuntime, text: &str) {
    for c in text.chars() {
        send(runtime, AppEvent::Key(KeyInput::Char(c))).await;
    }
}

async fn elapse(runtime: &mut SimRuntime, by: Duration) {
    runtime.driver().advance(by);
    pump(runtime).await;
}

fn controls_visible(runtime: &SimRuntime) -> bool {
    runtime.app().meeting().is_some_and(|room| room.controls_visible())
}

#[tokio::test]
async fn controls_hide_five_seconds_after_last_activity() {
    let mut runtime = runtime_at("/meeting/burst");

    // Activity at t = 0 (mount), 2, 4, 6 seconds.
    for _ in 0..3 {
        elapse(&mut runtime, Duration::from_secs(2)).await;
        send(&mut runtime, AppEvent::PointerMoved).await;
    }

    elapse(&mut runtime, Duration::from_millis(4_900)).await;
    assert!(controls_visible(&runtime));

    elapse(&mut runtime, Duration::from_millis(100)).await;
    assert!(!controls_visible(&runtime));
    assert_eq!(runtime.driver().now(), Duration::from_secs(11));
    assert_eq!(runtime.driver().max_armed(), 1);

    let snapshot = runtime.driver().last_snapshot().expect("hide renders a frame");
    let meeting = snapshot.meeting.expect("meeting mounted");
    assert!(!meeting.controls_visible);
    assert_eq!(meeting.pending_timer, None);
    assert_eq!(snapshot.armed_timers, Some(Vec::new()));
}

#[tokio::test]
async fn pointer_reveals_hidden_controls() {
    let mut runtime = runtime_at("/meeting/reveal");

    elapse(&mut runtime, Duration::from_secs(5)).await;
    assert!(!controls_visible(&runtime));
    assert!(runtime.driver().armed_timers().is_empty());

    send(&mut runtime, AppEvent::PointerMoved).await;
    assert!(controls_visible(&runtime));
    assert_eq!(runtime.driver().armed_timers().len(), 1);
}

#[tokio::test]
async fn keys_do_not_postpone_hiding() {
    let mut runtime = runtime_at("/meeting/keys");

    elapse(&mut runtime, Duration::from_secs(4)).await;
    send(&mut runtime, AppEvent::Key(KeyInput::Char('m'))).await;
    elapse(&mut runtime, Duration::from_secs(1)).await;

    assert!(!controls_visible(&runtime));
    assert!(runtime.app().meeting().is_some_and(|room| room.is_muted()));
}

#[tokio::test]
async fn join_from_landing_shows_full_grid() {
    let mut runtime = runtime_at("/");

    type_text(&mut runtime, "abc123").await;
    send(&mut runtime, AppEvent::Key(KeyInput::Enter)).await;

    assert_eq!(runtime.app().route().path(), "/meeting/abc123");
    let room = runtime.app().meeting().expect("meeting mounted");
    assert_eq!(room.roster().len(), 4);
    assert_eq!(room.tiles().len(), 5);
    assert_eq!(room.layout(), LayoutMode::Grid);
}

#[tokio::test]
async fn blank_join_stays_on_landing() {
    let mut runtime = runtime_at("/");

    type_text(&mut runtime, "   ").await;
    let renders = runtime.driver().render_count();
    send(&mut runtime, AppEvent::Key(KeyInput::Enter)).await;

    assert_eq!(runtime.app().route(), &Route::Landing);
    assert_eq!(runtime.driver().render_count(), renders);
}

#[tokio::test]
async fn end_call_disarms_timer_and_releases_viewport() {
    let mut runtime = runtime_at("/meeting/leave");
    assert_eq!(runtime.app().viewport_listener_count(), 1);

    send(&mut runtime, AppEvent::Key(KeyInput::Char('e'))).await;

    assert_eq!(runtime.app().route(), &Route::Landing);
    assert!(runtime.driver().armed_timers().is_empty());
    assert_eq!(runtime.app().viewport_listener_count(), 0);

    elapse(&mut runtime, Duration::from_secs(10)).await;
    assert!(!runtime.driver().has_pending());
}

#[tokio::test]
async fn resize_across_breakpoint_switches_viewport() {
    let mut runtime = runtime_at("/meeting/resize");

    send(&mut runtime, AppEvent::Resize { width_px: 400 }).await;
    assert!(runtime.app().meeting().is_some_and(|room| room.viewport().is_mobile()));

    send(&mut runtime, AppEvent::Resize { width_px: 1280 }).await;
    assert!(runtime.app().meeting().is_some_and(|room| !room.viewport().is_mobile()));
}

#[tokio::test]
async fn create_then_rejoin_same_id() {
    let mut runtime = runtime_at("/");

    send(&mut runtime, AppEvent::Key(KeyInput::Tab)).await;
    let created = runtime.app().route().clone();
    let Route::Meeting(id) = &created else {
        panic!("create should enter a meeting, got {created}");
    };
    assert_eq!(id.as_str().len(), 8);

    send(&mut runtime, AppEvent::Key(KeyInput::Esc)).await;
    type_text(&mut runtime, id.as_str()).await;
    send(&mut runtime, AppEvent::Key(KeyInput::Enter)).await;

    assert_eq!(runtime.app().route(), &created);
}

#[tokio::test]
async fn run_drains_events_and_stops_driver() {
    let driver = SimDriver::new().with_invariants(InvariantRegistry::standard());
    for event in [
        AppEvent::Key(KeyInput::Char('x')),
        AppEvent::Key(KeyInput::Enter),
        AppEvent::Key(KeyInput::Char('l')),
        AppEvent::Key(KeyInput::Char('q')),
    ] {
        driver.inject_event(event);
    }

    let runtime = Runtime::new(driver, SimEnv::with_seed(9), 1024, Route::Landing);
    runtime.run().await.expect("run completes");
}
