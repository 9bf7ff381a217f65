//! Landing screen
//!
//! Welcome text, the meeting-ID field with cursor, and key hints.

use quickmeet_app::LandingScreen;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Shown in the empty meeting-ID field.
pub const INPUT_PLACEHOLDER: &str = "Enter meeting ID";

const INPUT_WIDTH: u16 = 40;
const INPUT_HEIGHT: u16 = 3;
const BORDER_OFFSET: u16 = 1;

/// Render the landing screen.
pub fn render(frame: &mut Frame, landing: &LandingScreen, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(area);

    let [brand, _, welcome, tagline, _, input, hints, _] = chunks.as_ref() else {
        return;
    };

    let brand_line = Line::from(Span::styled(
        " QuickMeet",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(brand_line), *brand);

    frame.render_widget(
        Paragraph::new("Welcome to QuickMeet")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        *welcome,
    );
    frame.render_widget(
        Paragraph::new("Connect with teammates through simple, distraction-free video calls")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        *tagline,
    );

    render_input(frame, landing, centered(*input, INPUT_WIDTH));

    let key = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let hint_line = Line::from(vec![
        Span::styled("Tab", key),
        Span::raw(" Create Meeting   "),
        Span::styled("Enter", key),
        Span::raw(" Join Meeting   "),
        Span::styled("Esc", key),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hint_line).alignment(Alignment::Center), *hints);
}

/// Render the meeting-ID field and place the cursor.
#[allow(clippy::cast_possible_truncation)]
fn render_input(frame: &mut Frame, landing: &LandingScreen, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Meeting ID ");

    let text = if landing.input().is_empty() {
        Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(landing.input())
    };
    frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

    let available_width = area.width.saturating_sub(2 * BORDER_OFFSET);
    let cursor_offset = (landing.cursor().min(usize::from(u16::MAX)) as u16).min(available_width);
    let cursor_x = area.x.saturating_add(BORDER_OFFSET).saturating_add(cursor_offset);
    let cursor_y = area.y.saturating_add(BORDER_OFFSET);
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// `area` narrowed to `width` columns, horizontally centered.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    Rect { x, width, ..area }
}
