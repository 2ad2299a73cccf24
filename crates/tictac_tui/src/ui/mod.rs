//! Stateless rendering. Every frame is drawn from [`App`] alone.

mod board;
mod header;
mod moves;
mod start;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::app::{App, Screen};

/// Draws the current screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen
        ])
        .split(frame.area());

    header::draw(frame, chunks[0]);

    match (app.screen(), app.game()) {
        (Screen::Playing, Some(game)) => {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            board::draw(frame, cols[0], app, game);
            moves::draw(frame, cols[1], app, game);
        }
        _ => start::draw(frame, chunks[1]),
    }
}

/// Returns a `width` x `height` rectangle centred in `area`, clipped to it.
pub(crate) fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
