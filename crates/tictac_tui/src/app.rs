//! Application shell: start screen, in-game focus and the event loop.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tictac_core::{Game, MoveOrder, Position};
use tracing::{debug, info, instrument};

use crate::config::{Theme, TuiConfig};
use crate::input::move_cursor;
use crate::ui;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// "Let's Play" screen, no game exists.
    Start,
    /// Board and move list.
    Playing,
}

/// Which in-game panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor, Enter plays.
    #[default]
    Board,
    /// Arrows move through the move list, Enter jumps.
    Moves,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// The result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a fresh game.
    StartGame,
    /// Drop the game and show the start screen.
    GoToStart,
    /// Leave the application.
    Quit,
}

/// Main application state.
///
/// The [`Game`] is created when play starts and dropped when the player
/// returns to the start screen, so every visit starts from an empty board.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    game: Option<Game>,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    initial_order: MoveOrder,
    theme: Theme,
}

impl App {
    /// Creates the application from configuration.
    #[instrument(skip(config, theme))]
    pub fn new(config: &TuiConfig, theme: Theme) -> Self {
        let mut app = Self {
            screen: Screen::Start,
            game: None,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            initial_order: config.initial_order(),
            theme,
        };
        if *config.skip_start_screen() {
            app.apply_transition(ScreenTransition::StartGame);
        }
        app
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The running game, if play has started.
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Mark colours.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The shell's only input from the game core: whether play has started.
    pub fn has_started(&self) -> bool {
        self.screen == Screen::Playing
    }

    /// Runs the event loop until the user quits.
    ///
    /// Each key is handled to completion and the screen redrawn before the
    /// next event is read.
    #[instrument(skip_all)]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release on some platforms).
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                let transition = self.handle_key(key);
                if !self.apply_transition(transition) {
                    info!("Quitting");
                    return Ok(());
                }
            }
        }
    }

    /// Handles a key event and returns the resulting transition.
    #[instrument(skip(self, key), fields(code = ?key.code, screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match self.screen {
            Screen::Start => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => {
                    ScreenTransition::StartGame
                }
                KeyCode::Char('q') | KeyCode::Esc => ScreenTransition::Quit,
                _ => ScreenTransition::Stay,
            },
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') => return ScreenTransition::Quit,
            KeyCode::Char('h') | KeyCode::Esc => return ScreenTransition::GoToStart,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus changed");
            }
            KeyCode::Char('t') => self.toggle_order(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(pos) = Position::from_digit(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            code => match self.focus {
                Focus::Board => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
                    arrow => self.cursor = move_cursor(self.cursor, arrow),
                },
                Focus::Moves => match code {
                    KeyCode::Up => self.step_selection(-1),
                    KeyCode::Down => self.step_selection(1),
                    KeyCode::Enter | KeyCode::Char(' ') => self.jump_to_selected(),
                    _ => {}
                },
            },
        }
        ScreenTransition::Stay
    }

    /// Applies a transition. Returns `false` when the application should exit.
    #[instrument(skip(self))]
    pub fn apply_transition(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame => {
                info!(order = ?self.initial_order, "Starting new game");
                self.game = Some(Game::with_order(self.initial_order));
                self.screen = Screen::Playing;
                self.cursor = Position::Center;
                self.focus = Focus::Board;
                self.selected_move = 0;
            }
            ScreenTransition::GoToStart => {
                info!("Returning to start screen");
                self.game = None;
                self.screen = Screen::Start;
            }
            ScreenTransition::Quit => return false,
        }
        true
    }

    /// Square activation: forwards the move to the game, ignoring rejections.
    fn play(&mut self, pos: Position) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        match game.play(pos) {
            Ok(phase) => {
                debug!(position = %pos, phase = %phase, "Move accepted");
                self.selected_move = game.current_move();
            }
            Err(e) => debug!(position = %pos, error = %e, "Move ignored"),
        }
    }

    fn toggle_order(&mut self) {
        if let Some(game) = self.game.as_mut() {
            game.toggle_order();
        }
    }

    /// Moves the list selection `delta` rows down in display order.
    fn step_selection(&mut self, delta: isize) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        let latest = game.history().latest_move();
        let delta = match game.order() {
            MoveOrder::Ascending => delta,
            MoveOrder::Descending => -delta,
        };
        self.selected_move = self
            .selected_move
            .saturating_add_signed(delta)
            .min(latest);
    }

    fn jump_to_selected(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };
        if let Err(e) = game.jump_to(self.selected_move) {
            debug!(error = %e, "Jump ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictac_core::{Phase, Player};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn send(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            let transition = app.handle_key(key(*code));
            app.apply_transition(transition);
        }
    }

    fn started() -> App {
        let mut app = App::new(&TuiConfig::default(), Theme::default());
        send(&mut app, &[KeyCode::Enter]);
        app
    }

    #[test]
    fn test_starts_on_start_screen() {
        let app = App::new(&TuiConfig::default(), Theme::default());
        assert_eq!(app.screen(), Screen::Start);
        assert!(app.game().is_none());
        assert!(!app.has_started());
    }

    #[test]
    fn test_enter_starts_game() {
        let app = started();
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.game().map(Game::phase), Some(Phase::NoMovesMade));
    }

    #[test]
    fn test_digits_play_squares() {
        let mut app = started();
        send(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('4')]);
        let game = app.game().unwrap();
        assert_eq!(game.current_move(), 3);
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(app.selected_move(), 3);
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = started();
        send(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        let game = app.game().unwrap();
        assert!(!game.current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut app = started();
        send(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().unwrap().current_move(), 1);
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = started();
        send(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('3')]);
        send(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.game().unwrap().current_move(), 1);
        assert_eq!(app.game().unwrap().history().len(), 4);
    }

    #[test]
    fn test_selection_follows_display_order() {
        let mut app = started();
        send(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2')]);
        send(&mut app, &[KeyCode::Char('t'), KeyCode::Tab]);
        assert_eq!(app.game().unwrap().order(), MoveOrder::Descending);
        // Newest first: Down walks toward the game start.
        send(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected_move(), 0);
        send(&mut app, &[KeyCode::Up]);
        assert_eq!(app.selected_move(), 1);
    }

    #[test]
    fn test_home_discards_game() {
        let mut app = started();
        send(&mut app, &[KeyCode::Char('5'), KeyCode::Char('h')]);
        assert_eq!(app.screen(), Screen::Start);
        assert!(app.game().is_none());
        send(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.game().unwrap().current_move(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = started();
        assert_eq!(app.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
        assert!(!app.apply_transition(ScreenTransition::Quit));
    }

    #[test]
    fn test_skip_start_screen() {
        let cli = crate::Cli {
            skip_start_screen: true,
            ..Default::default()
        };
        let config = TuiConfig::default().with_overrides(&cli);
        let app = App::new(&config, Theme::default());
        assert_eq!(app.screen(), Screen::Playing);
        assert!(app.game().is_some());
    }
}
