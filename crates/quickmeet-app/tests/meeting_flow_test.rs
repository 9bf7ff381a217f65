//! Integration tests for the landing → meeting → landing flow.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The route and the active screen agree
//! - The roster and tiles match the fabricated meeting
//! - Leaving a meeting leaves nothing scheduled or subscribed behind

use quickmeet_app::{App, AppAction, AppEvent, KeyInput, LayoutMode, TileSubject};
use quickmeet_core::{LOCAL_DISPLAY_NAME, NAME_POOL, Route};
use quickmeet_harness::SimEnv;

fn type_text(app: &mut App<SimEnv>, text: &str) {
    for c in text.chars() {
        let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
    }
}

#[test]
fn joined_meeting_has_four_remote_participants() {
    let mut app = App::new(SimEnv::with_seed(42), 1280);
    type_text(&mut app, "abc123");
    let actions = app.handle(AppEvent::Key(KeyInput::Enter));

    assert!(actions.iter().any(|a| matches!(a, AppAction::ScheduleHideControls { .. })));
    assert!(actions.contains(&AppAction::Render));

    let room = app.meeting().expect("meeting mounted");
    assert_eq!(room.meeting_id().as_str(), "abc123");
    assert_eq!(room.roster().len(), 4);
    for participant in room.roster() {
        assert!(NAME_POOL.contains(&participant.name()));
    }

    let tiles = room.tiles();
    assert_eq!(tiles.len(), 5);
    assert_eq!(tiles[0].subject, TileSubject::Local);
    assert_eq!(tiles[0].name, LOCAL_DISPLAY_NAME);
}

#[test]
fn local_toggles_show_on_local_tile() {
    let mut app = App::new(SimEnv::with_seed(3), 1280);
    let _ = app.navigate("/meeting/tile".parse().expect("valid path"));

    let _ = app.handle(AppEvent::Key(KeyInput::Char('m')));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('v')));

    let room = app.meeting().expect("meeting mounted");
    let local = room.tiles()[0];
    assert!(local.is_local() && local.muted && local.video_off);
    assert!(!room.is_screen_sharing());
}

#[test]
fn focus_layout_shows_only_local_tile() {
    let mut app = App::new(SimEnv::with_seed(5), 1280);
    let _ = app.navigate("/meeting/focus".parse().expect("valid path"));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('l')));

    let room = app.meeting().expect("meeting mounted");
    assert_eq!(room.layout(), LayoutMode::Focus);
    let tiles = room.tiles();
    assert_eq!(tiles.len(), 1);
    assert!(tiles[0].focused && tiles[0].is_local());
}

#[test]
fn same_seed_same_roster() {
    let mut a = App::new(SimEnv::with_seed(11), 1280);
    let mut b = App::new(SimEnv::with_seed(11), 1280);
    let _ = a.navigate("/meeting/x".parse().expect("valid path"));
    let _ = b.navigate("/meeting/x".parse().expect("valid path"));

    assert_eq!(a.meeting().map(|r| r.roster().clone()), b.meeting().map(|r| r.roster().clone()));
}

#[test]
fn chat_sidebar_shows_canned_transcript() {
    let mut app = App::new(SimEnv::with_seed(1), 1280);
    let _ = app.navigate("/meeting/chat".parse().expect("valid path"));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('c')));

    let room = app.meeting().expect("meeting mounted");
    assert!(room.is_chat_open());
    assert_eq!(room.transcript().len(), 3);
    assert!(room.transcript()[0].is_local());
}

#[test]
fn leaving_and_rejoining_starts_fresh() {
    let mut app = App::new(SimEnv::with_seed(8), 1280);
    let _ = app.navigate("/meeting/again".parse().expect("valid path"));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('m')));
    let _ = app.handle(AppEvent::Key(KeyInput::Char('e')));

    assert_eq!(app.route(), &Route::Landing);
    assert_eq!(app.viewport_listener_count(), 0);

    type_text(&mut app, "again");
    let _ = app.handle(AppEvent::Key(KeyInput::Enter));

    let room = app.meeting().expect("meeting mounted");
    assert!(!room.is_muted());
    assert!(room.controls_visible());
    assert_eq!(app.viewport_listener_count(), 1);
}

#[test]
fn quit_from_either_screen() {
    let mut app = App::new(SimEnv::with_seed(1), 1280);
    assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);

    let _ = app.navigate("/meeting/q".parse().expect("valid path"));
    assert_eq!(app.handle(AppEvent::Key(KeyInput::Char('q'))), vec![AppAction::Quit]);
}
