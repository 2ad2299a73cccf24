//! Scenario tests for playing, finishing and time-travelling a game.

use tictac_core::{
    EntryKind, Game, GameStatus, MoveError, MoveOrder, Phase, Player, Position, Square,
};

fn play_all(game: &mut Game, positions: &[usize]) {
    for &index in positions {
        let pos = Position::from_index(index).expect("index in range");
        game.play(pos).expect("legal move");
    }
}

#[test]
fn test_x_wins_left_column() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);

    assert_eq!(game.phase(), Phase::Won);
    assert_eq!(game.status().winner(), Some(Player::X));
    assert_eq!(game.winning_line().map(|l| l.indices()), Some([0, 3, 6]));
    assert_eq!(game.status().to_string(), "Winner: X");

    // Every remaining empty square is now a no-op.
    let before = game.clone();
    for pos in Position::valid_moves(game.current_board()) {
        assert_eq!(game.play(pos), Err(MoveError::GameOver(Player::X)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_full_board_without_line_is_tie() {
    // X O X / X O O / O X X
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.status(), GameStatus::Tie);
    assert_eq!(game.phase(), Phase::Tied);
    assert_eq!(game.status().to_string(), "It's a Tie!");
    assert!(game.winning_line().is_none());

    // Every square is taken, so a further move is rejected and changes nothing.
    let before = game.clone();
    assert_eq!(
        game.play(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game, before);
}

#[test]
fn test_jump_back_and_branch_discards_future() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(3).unwrap();
    game.jump_to(1).unwrap();
    assert_eq!(game.history().len(), 5);
    assert_eq!(game.to_move(), Player::O);

    game.play(Position::BottomLeft).unwrap();
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    assert_eq!(
        game.current_board().get(Position::BottomLeft),
        Square::Occupied(Player::O)
    );
    // The old move #2 (O at top-left) is gone.
    assert!(game.current_board().is_empty(Position::TopLeft));
    assert!(game.jump_to(3).is_err());
}

#[test]
fn test_record_length_is_pointer_plus_two() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8, 2, 6]);
    for pointer in (0..game.history().len()).rev() {
        let mut branch = game.clone();
        branch.jump_to(pointer).unwrap();
        let Some(pos) = Position::valid_moves(branch.current_board()).first().copied() else {
            continue;
        };
        if branch.play(pos).is_ok() {
            assert_eq!(branch.history().len(), pointer + 2);
        }
    }
}

#[test]
fn test_jump_to_past_win_reopens_play() {
    let mut game = Game::new();
    play_all(&mut game, &[0, 1, 3, 4, 6]);
    assert!(!game.phase().accepts_moves());

    game.jump_to(4).unwrap();
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.to_move(), Player::X);

    // X blocks differently and the branch is in progress again.
    game.play(Position::BottomRight).unwrap();
    assert_eq!(game.phase(), Phase::InProgress);
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_move_parity_matches_history_index() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8, 2, 6, 3]);
    let snapshots = game.history().snapshots();
    for k in 1..snapshots.len() {
        let changed = snapshots[k - 1].diff(&snapshots[k]);
        assert_eq!(changed.len(), 1);
        let expected = if k % 2 == 1 { Player::X } else { Player::O };
        assert_eq!(snapshots[k].get(changed[0]), Square::Occupied(expected));
    }
}

#[test]
fn test_out_of_range_jump_rejected() {
    let mut game = Game::new();
    play_all(&mut game, &[4]);
    let before = game.clone();
    assert!(game.jump_to(2).is_err());
    assert!(game.jump_to(usize::MAX).is_err());
    assert_eq!(game, before);
}

#[test]
fn test_move_list_follows_pointer_and_order() {
    let mut game = Game::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump_to(2).unwrap();

    let ascending = game.moves();
    let current: Vec<usize> = ascending
        .iter()
        .filter(|d| *d.kind() == EntryKind::Current)
        .map(|d| *d.move_number())
        .collect();
    assert_eq!(current, vec![2]);

    game.toggle_order();
    assert_eq!(game.order(), MoveOrder::Descending);
    let descending: Vec<usize> = game.moves().iter().map(|d| *d.move_number()).collect();
    assert_eq!(descending, vec![3, 2, 1, 0]);
    assert_eq!(game.current_move(), 2);
}
