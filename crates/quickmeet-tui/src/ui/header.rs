//! Meeting header
//!
//! Brand and meeting ID on the left; participant count and clock badge on
//! the right.

use chrono::{DateTime, Local};
use quickmeet_app::MeetingRoom;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the header line.
pub fn render(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    let mut left = vec![
        Span::styled(" Quick-meet ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(" ID: {} ", room.meeting_id()),
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        ),
    ];
    if room.is_screen_sharing() {
        left.push(Span::styled(" ● Sharing screen", Style::default().fg(Color::Green)));
    }

    let clock = room.clock_secs().and_then(format_clock).unwrap_or_else(|| "--:--".to_string());
    let badge = format!(" {} participants │ {clock} ", room.participant_count());
    let badge_width = u16::try_from(badge.chars().count()).unwrap_or(u16::MAX);

    let [left_area, badge_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(left)), left_area);
    frame.render_widget(
        Paragraph::new(badge).style(Style::default().fg(Color::White).bg(Color::DarkGray)),
        badge_area,
    );
}

/// Local time as `hh:mm AM`. `None` if `unix_secs` is out of range.
pub fn format_clock(unix_secs: u64) -> Option<String> {
    let secs = i64::try_from(unix_secs).ok()?;
    let utc = DateTime::from_timestamp(secs, 0)?;
    Some(utc.with_timezone(&Local).format("%I:%M %p").to_string())
}
