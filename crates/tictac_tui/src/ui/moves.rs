//! Move history list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use tictac_core::{Game, MoveDescriptor};

use crate::app::{App, Focus};
use crate::config::Theme;

pub(super) fn draw(frame: &mut Frame, area: Rect, app: &App, game: &Game) {
    let moves = game.moves();
    let items: Vec<ListItem> = moves
        .iter()
        .map(|entry| ListItem::new(entry_line(entry, app.theme())))
        .collect();

    let focused = app.focus() == Focus::Moves;
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let title = format!(" Moves ({}) ", game.order().label());

    let mut list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title),
    );
    if focused {
        list = list
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("> ");
    }

    let mut state = ListState::default();
    state.select(
        moves
            .iter()
            .position(|entry| *entry.move_number() == app.selected_move()),
    );
    frame.render_stateful_widget(list, area, &mut state);
}

/// `#k` takes the colour of the player who made move k.
fn entry_line(entry: &MoveDescriptor, theme: &Theme) -> Line<'static> {
    let label = entry.label();
    let number = format!("#{}", entry.move_number());

    let base = if entry.is_current() {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    match (entry.author(), label.strip_suffix(number.as_str())) {
        (Some(player), Some(prefix)) => Line::from(vec![
            Span::styled(prefix.to_string(), base),
            Span::styled(number, base.fg(theme.player(player))),
        ]),
        _ => Line::from(Span::styled(label, base)),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::{Theme, TuiConfig};
    use crate::ui::test_support::{contains, lines, render};

    fn playing(codes: &[KeyCode]) -> App {
        let mut app = App::new(&TuiConfig::default(), Theme::default());
        for code in std::iter::once(&KeyCode::Enter).chain(codes) {
            let transition = app.handle_key(KeyEvent::new(*code, KeyModifiers::NONE));
            app.apply_transition(transition);
        }
        app
    }

    fn row_of(app: &App, needle: &str) -> Option<usize> {
        lines(&render(app)).iter().position(|l| l.contains(needle))
    }

    #[test]
    fn test_fresh_game_lists_start_only() {
        let buffer = render(&playing(&[]));
        assert!(contains(&buffer, "You're at move #0"));
        assert!(!contains(&buffer, "Go to"));
        assert!(contains(&buffer, "Oldest first"));
    }

    #[test]
    fn test_entries_after_moves() {
        let app = playing(&[KeyCode::Char('1'), KeyCode::Char('5')]);
        let buffer = render(&app);
        assert!(contains(&buffer, "Go to game start"));
        assert!(contains(&buffer, "Go to move #1"));
        assert!(contains(&buffer, "You're at move #2"));
    }

    #[test]
    fn test_descending_order_reverses_rows() {
        let mut app = playing(&[KeyCode::Char('1'), KeyCode::Char('5')]);
        let start = row_of(&app, "Go to game start").unwrap();
        let latest = row_of(&app, "You're at move #2").unwrap();
        assert!(start < latest);

        app.handle_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        assert!(contains(&render(&app), "Newest first"));
        let start = row_of(&app, "Go to game start").unwrap();
        let latest = row_of(&app, "You're at move #2").unwrap();
        assert!(start > latest);
    }

    #[test]
    fn test_jump_moves_current_marker() {
        let app = playing(&[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Tab,
            KeyCode::Up,
            KeyCode::Up,
            KeyCode::Enter,
        ]);
        let buffer = render(&app);
        assert!(contains(&buffer, "You're at move #0"));
        assert!(contains(&buffer, "Go to move #2"));
        assert!(contains(&buffer, "X is on the move"));
    }
}
