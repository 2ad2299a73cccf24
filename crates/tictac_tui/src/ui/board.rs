//! Game board with cursor and status line.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{BoardView, Game, GameStatus, Square, SquareView};

use super::center_rect;
use crate::app::{App, Focus};
use crate::config::Theme;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let view = game.board_view();

    let border = if app.focus() == Focus::Board {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Board ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Min(11),   // Grid
            Constraint::Length(1), // Key help
        ])
        .split(inner);

    draw_status(frame, chunks[0], &view, app.theme());
    draw_grid(frame, chunks[1], &view, app);

    let help = if game.phase().accepts_moves() {
        "1-9/Enter: play  Tab: moves  t: order  h: home  q: quit"
    } else {
        "Tab: moves to travel back  t: order  h: home  q: quit"
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

/// Status line; the leading player mark takes that player's colour.
fn draw_status(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = match *view.status() {
        GameStatus::ToMove(player) => Line::from(vec![
            Span::styled(player.to_string(), bold.fg(theme.player(player))),
            Span::raw(" is on the move"),
        ]),
        GameStatus::Won { winner, .. } => Line::from(vec![
            Span::styled("Winner: ", bold),
            Span::styled(winner.to_string(), bold.fg(theme.player(winner))),
        ]),
        GameStatus::Tie => Line::from(Span::styled(view.status().to_string(), bold)),
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_grid(frame: &mut Frame, area: Rect, view: &BoardView, app: &App) {
    let grid = center_rect(area, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(grid);

    for (i, squares) in view.rows().enumerate() {
        draw_row(frame, rows[i * 2], squares, view, app);
        if i < 2 {
            draw_separator(frame, rows[i * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, squares: &[SquareView], view: &BoardView, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (i, square) in squares.iter().enumerate() {
        draw_cell(frame, cols[i * 2], square, view, app);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: &SquareView, view: &BoardView, app: &App) {
    let (symbol, mut style) = match *square.square() {
        // Empty squares show the digit that plays them.
        Square::Empty => (
            format!("{}", square.position().to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.to_string(),
            Style::default()
                .fg(app.theme().player(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if *square.highlighted() {
        style = style.bg(Color::Yellow).fg(Color::Black);
    } else if *square.dimmed() {
        style = style.fg(Color::DarkGray).remove_modifier(Modifier::BOLD);
    }
    // No cursor once the snapshot is decided.
    let cursor_shown = app.focus() == Focus::Board && !view.status().is_over();
    if cursor_shown && *square.position() == app.cursor() {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Fill the whole cell so highlight and cursor read as a block.
    let blank = " ".repeat(area.width as usize);
    let pad = (area.width as usize).saturating_sub(symbol.len()) / 2;
    let middle = format!(
        "{:<width$}",
        format!("{}{}", " ".repeat(pad), symbol),
        width = area.width as usize
    );
    let text = vec![
        Line::from(Span::styled(blank.clone(), style)),
        Line::from(Span::styled(middle, style)),
        Line::from(Span::styled(blank, style)),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}
