//! Application state machine.
//!
//! This module defines the [`App`] state machine, which routes between the
//! landing and meeting screens completely decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Owns the active screen and the route it was reached by.
//! - Mounts a fresh [`MeetingRoom`] per navigation, with its own roster,
//!   viewport subscription and hide timer.
//! - Unmounts on navigation away, cancelling the pending hide expiry.
//! - Maps keys to screen operations.

use quickmeet_core::{EnvRng, Environment, Roster, Route};

use crate::{AppAction, AppEvent, KeyInput, LandingScreen, MeetingRoom, ViewportSignal};

/// Active screen.
#[derive(Debug)]
pub enum Screen {
    /// Landing screen.
    Landing(LandingScreen),
    /// Meeting screen.
    Meeting(Box<MeetingRoom>),
}

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug)]
pub struct App<E: Environment> {
    /// Randomness and wall clock.
    env: E,
    /// Active screen.
    screen: Screen,
    /// Route of the active screen.
    route: Route,
    /// Host window width publisher.
    viewport: ViewportSignal,
    /// Meeting mounts so far. Seeds each room's timer IDs.
    mounts: u64,
}

impl<E: Environment> App<E> {
    /// Create an App on the landing screen.
    pub fn new(env: E, initial_width_px: u32) -> Self {
        Self {
            env,
            screen: Screen::Landing(LandingScreen::new()),
            route: Route::Landing,
            viewport: ViewportSignal::new(initial_width_px),
            mounts: 0,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::PointerMoved => match &mut self.screen {
                Screen::Meeting(room) => room.on_pointer_activity(),
                Screen::Landing(_) => vec![],
            },
            AppEvent::Resize { width_px } => {
                self.viewport.publish(width_px);
                match &mut self.screen {
                    Screen::Meeting(room) => room.sync_viewport(),
                    Screen::Landing(_) => vec![AppAction::Render],
                }
            },
            AppEvent::ControlsTimerExpired { timer } => match &mut self.screen {
                Screen::Meeting(room) => room.on_controls_timer_expired(timer),
                Screen::Landing(_) => {
                    tracing::trace!(%timer, "hide expiry after leaving meeting");
                    vec![]
                },
            },
            AppEvent::Clock { unix_secs } => match &mut self.screen {
                Screen::Meeting(room) => room.on_clock(unix_secs),
                Screen::Landing(_) => vec![],
            },
        }
    }

    /// Handle keyboard input for the active screen.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Landing(landing) => match key {
                KeyInput::Char(c) => {
                    landing.insert(c);
                    vec![AppAction::Render]
                },
                KeyInput::Backspace => {
                    landing.backspace();
                    vec![AppAction::Render]
                },
                KeyInput::Delete => {
                    landing.delete();
                    vec![AppAction::Render]
                },
                KeyInput::Left => {
                    landing.move_left();
                    vec![AppAction::Render]
                },
                KeyInput::Right => {
                    landing.move_right();
                    vec![AppAction::Render]
                },
                KeyInput::Home => {
                    landing.move_home();
                    vec![AppAction::Render]
                },
                KeyInput::End => {
                    landing.move_end();
                    vec![AppAction::Render]
                },
                KeyInput::Enter => self.join_meeting(),
                KeyInput::Tab => self.create_meeting(),
                KeyInput::Esc => self.quit(),
            },
            Screen::Meeting(room) => match key {
                KeyInput::Char('m') => room.toggle_mute(),
                KeyInput::Char('v') => room.toggle_video(),
                KeyInput::Char('s') => room.toggle_screen_share(),
                KeyInput::Char('l') => room.toggle_layout(),
                KeyInput::Char('c') => room.toggle_chat(),
                KeyInput::Char('e') | KeyInput::Esc => self.end_call(),
                KeyInput::Char('q') => self.quit(),
                _ => vec![],
            },
        }
    }

    /// Navigate to `route`, unmounting the active screen.
    pub fn navigate(&mut self, route: Route) -> Vec<AppAction> {
        let mut actions = Vec::new();

        let previous = std::mem::replace(&mut self.screen, Screen::Landing(LandingScreen::new()));
        if let Screen::Meeting(room) = previous {
            actions.extend(room.end_call());
        }

        if let Route::Meeting(meeting_id) = &route {
            self.mounts += 1;
            let roster = Roster::generate(&mut EnvRng::new(&self.env));
            let (room, mount_actions) = MeetingRoom::mount(
                meeting_id.clone(),
                roster,
                self.viewport.subscribe(),
                self.mounts,
            );
            self.screen = Screen::Meeting(Box::new(room));
            actions.extend(mount_actions);
        }

        tracing::info!(path = %route, "navigated");
        self.route = route.clone();
        actions.push(AppAction::Navigated(route));
        actions.push(AppAction::Render);
        actions
    }

    /// Create a meeting with a generated ID and enter it.
    pub fn create_meeting(&mut self) -> Vec<AppAction> {
        let Screen::Landing(landing) = &self.screen else {
            return vec![];
        };
        let route = landing.create_meeting(&mut EnvRng::new(&self.env));
        self.navigate(route)
    }

    /// Enter the meeting typed on the landing screen.
    ///
    /// Silent no-op if the field is blank.
    pub fn join_meeting(&mut self) -> Vec<AppAction> {
        let Screen::Landing(landing) = &self.screen else {
            return vec![];
        };
        match landing.join_meeting() {
            Some(route) => self.navigate(route),
            None => vec![],
        }
    }

    /// Leave the meeting and return to the landing screen.
    pub fn end_call(&mut self) -> Vec<AppAction> {
        if !matches!(self.screen, Screen::Meeting(_)) {
            return vec![];
        }
        self.navigate(Route::Landing)
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Route of the active screen.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Active screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Landing screen state. `None` in a meeting.
    pub fn landing(&self) -> Option<&LandingScreen> {
        match &self.screen {
            Screen::Landing(landing) => Some(landing),
            Screen::Meeting(_) => None,
        }
    }

    /// Meeting room state. `None` on the landing screen.
    pub fn meeting(&self) -> Option<&MeetingRoom> {
        match &self.screen {
            Screen::Meeting(room) => Some(room),
            Screen::Landing(_) => None,
        }
    }

    /// Last published window width in pixels.
    pub fn viewport_width_px(&self) -> u32 {
        self.viewport.width_px()
    }

    /// Live viewport subscriptions. One while in a meeting, zero otherwise.
    pub fn viewport_listener_count(&self) -> usize {
        self.viewport.listener_count()
    }
}
