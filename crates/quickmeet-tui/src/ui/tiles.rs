//! Video tiles
//!
//! Grid layout packs the tiles into rows; focus layout draws the single
//! local tile over the whole area.

use quickmeet_app::{MeetingRoom, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Tile columns on a mobile-width window.
pub const MOBILE_COLUMNS: usize = 2;

/// Tile columns on a desktop-width window.
pub const DESKTOP_COLUMNS: usize = 3;

/// Render the tile set.
pub fn render(frame: &mut Frame, room: &MeetingRoom, area: Rect) {
    let tiles = room.tiles();
    let columns = match tiles.len() {
        0 => return,
        1 => 1,
        _ if room.viewport().is_mobile() => MOBILE_COLUMNS,
        _ => DESKTOP_COLUMNS,
    };
    let rows = tiles.len().div_ceil(columns);

    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, ratio(rows)); rows]).split(area);
    for (row, row_area) in tiles.chunks(columns).zip(row_areas.iter()) {
        let cell_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, ratio(columns)); columns]).split(*row_area);
        for (tile, cell_area) in row.iter().zip(cell_areas.iter()) {
            render_tile(frame, tile, *cell_area);
        }
    }
}

fn ratio(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Render one tile: name label, muted marker, and either a video
/// placeholder or the initials.
fn render_tile(frame: &mut Frame, tile: &Tile<'_>, area: Rect) {
    let mut title = vec![Span::raw(format!(" {} ", tile.name))];
    if tile.muted {
        title.push(Span::styled("[muted] ", Style::default().fg(Color::Red)));
    }

    let border_style = if tile.is_local() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let border_type = if tile.focused { BorderType::Double } else { BorderType::Rounded };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .title_bottom(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = if tile.video_off {
        Span::styled(
            format!("( {} )", tile.initials),
            Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(tile.name, Style::default().fg(Color::Gray).add_modifier(Modifier::DIM))
    };

    let middle = Rect { y: inner.y + inner.height / 2, height: inner.height.min(1), ..inner };
    frame.render_widget(Paragraph::new(Line::from(body)).alignment(Alignment::Center), middle);
}
