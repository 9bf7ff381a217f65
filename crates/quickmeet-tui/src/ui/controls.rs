//! Meeting controls
//!
//! A vertical column on desktop-width windows, a bottom bar on mobile.
//! Each control shows its key and what pressing it does next.

use quickmeet_app::{LayoutMode, MeetingRoom};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Width of the desktop control column.
pub const COLUMN_WIDTH: u16 = 18;

/// Height of the mobile control bar.
pub const BAR_HEIGHT: u16 = 1;

struct Control {
    key: char,
    label: &'static str,
    active: bool,
}

fn controls(room: &MeetingRoom) -> [Control; 6] {
    let focus = room.layout() == LayoutMode::Focus;
    [
        Control {
            key: 'm',
            label: if room.is_muted() { "Unmute" } else { "Mute" },
            active: room.is_muted(),
        },
        Control {
            key: 'v',
            label: if room.is_video_off() { "Start video" } else { "Stop video" },
            active: room.is_video_off(),
        },
        Control {
            key: 's',
            label: if room.is_screen_sharing() { "Stop share" } else { "Share" },
            active: room.is_screen_sharing(),
        },
        Control { key: 'l', label: if focus { "Grid view" } else { "Focus view" }, active: focus },
        Control {
            key: 'c',
            label: if room.is_chat_open() { "Close chat" } else { "Chat" },
            active: room.is_chat_open(),
        },
        Control { key: 'e', label: "End call", active: false },
    ]
}

fn spans(control: &Control) -> [Span<'static>; 2] {
    let label_style = match (control.key, control.active) {
        ('e', _) => Style::default().fg(Color::White).bg(Color::Red),
        (_, true) => Style::default().fg(Color::Black).bg(Color::Yellow),
        (_, false) => Style::default().fg(Color::White),
    };
    [
        Span::styled(
            format!("[{}]", control.key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {}", control.label), label_style),
    ]
}

/// Render the desktop control column.
pub fn render_column(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    let lines: Vec<Line> = controls(room).iter().map(|c| Line::from(spans(c).to_vec())).collect();
    let block = Block::default().borders(Borders::ALL).title(" Controls ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the mobile control bar.
pub fn render_bar(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    let mut line = Vec::new();
    for control in &controls(room) {
        line.extend(spans(control));
        line.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(line)).style(Style::default().bg(Color::Black)),
        area,
    );
}
