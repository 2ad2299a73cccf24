//! Tic-tac-toe game logic with snapshot history.
//!
//! This crate holds everything about the game that is not presentation:
//! detecting wins and ties, applying a move to a snapshot, recording
//! snapshots and travelling back through them.
//!
//! # Architecture
//!
//! - **Rules**: pure win/tie detection over a [`Board`]
//! - **Contracts**: ordered move preconditions; [`apply_move`] yields a new snapshot
//! - **History**: snapshots plus a pointer; recording truncates at the pointer
//! - **Game**: the single owner of session state, with a command and a query side
//!
//! # Example
//!
//! ```
//! use tictac_core::{Game, GameStatus, Phase, Player, Position};
//!
//! let mut game = Game::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::TopCenter,
//!     Position::MiddleLeft,
//!     Position::Center,
//!     Position::BottomLeft,
//! ] {
//!     game.play(pos).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Won);
//! assert_eq!(game.status().winner(), Some(Player::X));
//!
//! // Travel back and branch.
//! game.jump_to(1).unwrap();
//! assert!(matches!(game.status(), GameStatus::ToMove(Player::O)));
//! game.play(Position::BottomRight).unwrap();
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod status;
mod types;
mod view;

pub use action::{Move, MoveError};
pub use contracts::{
    BoardHasSpace, Contract, LegalMove, MoveContract, NoWinnerYet, SquareIsEmpty, apply_move,
};
pub use game::Game;
pub use history::{History, HistoryError};
pub use move_list::{EntryKind, MoveDescriptor, MoveOrder, describe};
pub use position::Position;
pub use rules::WinningLine;
pub use status::{GameStatus, Phase};
pub use types::{Board, ParseBoardError, Player, Square};
pub use view::{BoardView, SquareView};
