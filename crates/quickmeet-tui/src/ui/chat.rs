//! Chat sidebar
//!
//! Shows the canned transcript and a display-only input.

use quickmeet_app::MeetingRoom;
use quickmeet_core::CHAT_INPUT_PLACEHOLDER;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const INPUT_HEIGHT: u16 = 3;

/// Render the chat sidebar.
pub fn render(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Chat ").title_bottom(" [c] close ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [messages_area, input_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(INPUT_HEIGHT)]).areas(inner);

    let mut lines = Vec::new();
    for message in room.transcript() {
        let alignment = if message.is_local() { Alignment::Right } else { Alignment::Left };
        let body_style = if message.is_local() {
            Style::default().fg(Color::White).bg(Color::Blue)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };

        lines.push(
            Line::from(vec![
                Span::styled(message.sender, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" {}", message.sent_at), Style::default().fg(Color::DarkGray)),
            ])
            .alignment(alignment),
        );
        lines.push(Line::from(Span::styled(message.body, body_style)).alignment(alignment));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), messages_area);

    let input = Paragraph::new(Span::styled(
        CHAT_INPUT_PLACEHOLDER,
        Style::default().fg(Color::DarkGray),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, input_area);
}
