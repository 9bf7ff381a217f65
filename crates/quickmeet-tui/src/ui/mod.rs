//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod chat;
mod controls;
mod header;
mod landing;
mod tiles;

use quickmeet_app::{App, ControlsVisibility, MeetingRoom, Screen};
use quickmeet_core::Environment;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

/// Render the entire UI.
pub fn render<E: Environment>(frame: &mut Frame, app: &App<E>) {
    let area = frame.area();
    match app.screen() {
        Screen::Landing(landing) => landing::render(frame, landing, area),
        Screen::Meeting(room) => render_meeting(frame, room, area),
    }
}

/// Render the meeting screen.
///
/// The header and control areas stay reserved while the controls are
/// hidden, so the tiles never jump.
fn render_meeting(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    const HEADER_HEIGHT: u16 = 1;
    const BODY_MIN_HEIGHT: u16 = 3;

    let mobile = room.viewport().is_mobile();
    let bar_height = if mobile { controls::BAR_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(BODY_MIN_HEIGHT),
            Constraint::Length(bar_height),
        ])
        .split(area);

    let [header_area, body_area, bar_area] = chunks.as_ref() else {
        return;
    };

    let controls_visible = room.controls() == ControlsVisibility::Visible;
    if controls_visible {
        header::render(frame, room, *header_area);
    }

    if mobile {
        render_mobile_body(frame, room, *body_area);
        if controls_visible {
            controls::render_bar(frame, room, *bar_area);
        }
    } else {
        render_desktop_body(frame, room, *body_area, controls_visible);
    }
}

/// Mobile: the chat sidebar covers the video area while open.
fn render_mobile_body(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    if room.is_chat_open() {
        chat::render(frame, room, area);
    } else {
        tiles::render(frame, room, area);
    }
}

/// Desktop: tiles, then the vertical control column, then chat if open.
fn render_desktop_body(frame: &mut Frame, room: &MeetingRoom, area: Rect, controls_visible: bool) {
    const TILES_MIN_WIDTH: u16 = 20;
    const CHAT_WIDTH: u16 = 36;

    let chat_width = if room.is_chat_open() { CHAT_WIDTH } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(TILES_MIN_WIDTH),
            Constraint::Length(controls::COLUMN_WIDTH),
            Constraint::Length(chat_width),
        ])
        .split(area);

    let [tiles_area, controls_area, chat_area] = chunks.as_ref() else {
        return;
    };

    tiles::render(frame, room, *tiles_area);
    if controls_visible {
        controls::render_column(frame, room, *controls_area);
    }
    if room.is_chat_open() {
        chat::render(frame, room, *chat_area);
    }
}
