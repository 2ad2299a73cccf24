//! Title bar.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const ORANGE: Color = Color::Rgb(0xff, 0xa5, 0x00);

pub(super) fn draw(frame: &mut Frame, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let title = Line::from(vec![
        Span::styled("Tic", bold.fg(ORANGE)),
        Span::styled("Tac", bold.fg(Color::Blue)),
        Span::styled("Toe", bold.fg(Color::Green)),
    ]);
    let header = Paragraph::new(title)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}
