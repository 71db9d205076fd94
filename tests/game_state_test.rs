//! Tests for the game state machine.

use tictactoe::{Cell, GameState, MoveError, Outcome, Player, Position};

fn play_all(game: &mut GameState, moves: &[(usize, usize)]) -> Outcome {
    let mut outcome = game.outcome();
    for &(row, column) in moves {
        outcome = game.play_move(row, column);
    }
    outcome
}

#[test]
fn test_top_row_win_after_five_moves() {
    let mut game = GameState::new();
    let outcome = play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(outcome, Outcome::Win(Player::X));
    assert_eq!(game.moves_played(), 5);
    assert!(game.is_terminal());
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut game = GameState::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
    ];
    for (i, &(row, column)) in moves.iter().enumerate() {
        assert_eq!(
            game.play_move(row, column),
            Outcome::InProgress,
            "game ended early at move {}",
            i + 1
        );
    }
    assert_eq!(game.play_move(2, 2), Outcome::Draw);
    assert_eq!(game.moves_played(), 9);
    assert!(!game.evaluate_win(Player::X));
    assert!(!game.evaluate_win(Player::O));
}

#[test]
fn test_win_on_last_move_beats_draw() {
    // X O X
    // X O O
    // X X O
    let mut game = GameState::new();
    let moves = [
        (1, 0), // X
        (0, 1), // O
        (0, 2), // X
        (1, 1), // O
        (2, 1), // X
        (1, 2), // O
        (2, 0), // X
        (2, 2), // O
        (0, 0), // X completes column 0 on the ninth move
    ];
    let outcome = play_all(&mut game, &moves);
    assert_eq!(game.moves_played(), 9);
    assert_eq!(outcome, Outcome::Win(Player::X));
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut game = GameState::new();
    game.play_move(1, 1);
    let before = game.clone();

    assert_eq!(game.play_move(1, 1), Outcome::InProgress);
    assert_eq!(game, before);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.board().get(Position::CENTER), Cell::Occupied(Player::X));

    assert_eq!(
        game.try_play(1, 1),
        Err(MoveError::CellOccupied(Position::CENTER))
    );
    assert_eq!(game, before);
}

#[test]
fn test_out_of_bounds_leaves_state_unchanged() {
    let mut game = GameState::new();
    game.play_move(0, 0);
    let before = game.clone();

    assert_eq!(game.play_move(0, 3), Outcome::InProgress);
    assert_eq!(game.play_move(usize::MAX, 0), Outcome::InProgress);
    assert_eq!(game, before);
}

#[test]
fn test_terminal_state_is_read_only() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let finished = game.clone();

    for pos in Position::all() {
        assert_eq!(game.play_move(pos.row(), pos.column()), Outcome::Win(Player::X));
    }
    assert_eq!(game, finished);
    assert_eq!(game.try_play(2, 0), Err(MoveError::GameOver));
}

#[test]
fn test_moves_played_counts_accepted_moves() {
    // Mix of accepted and rejected moves, played in a fixed pseudo-random order
    let attempts = [
        (1, 1),
        (1, 1),
        (0, 0),
        (5, 5),
        (0, 0),
        (2, 2),
        (0, 2),
        (2, 0),
        (2, 0),
        (1, 2),
        (1, 0),
    ];

    let mut game = GameState::new();
    let mut accepted = 0;
    for (row, column) in attempts {
        let mut probe = game.clone();
        if probe.try_play(row, column).is_ok() {
            accepted += 1;
        }
        game.play_move(row, column);
        assert_eq!(game, probe);
        assert_eq!(game.moves_played(), accepted);
    }
    assert_eq!(game.history().len(), accepted);
}

#[test]
fn test_cells_never_change_once_set() {
    let mut game = GameState::new();
    let order = [4, 0, 8, 2, 6, 1, 7, 3, 5];
    let mut seen = Vec::new();

    for index in order {
        if game.is_terminal() {
            break;
        }
        let pos = Position::from_index(index).unwrap();
        game.play_at(pos).unwrap();
        seen.push((pos, game.board().get(pos)));

        for (earlier, cell) in &seen {
            assert_eq!(game.board().get(*earlier), *cell);
        }
    }
}

#[test]
fn test_configured_first_player() {
    let mut game = GameState::with_first_player(Player::O);
    assert_eq!(game.current_player(), Player::O);

    game.play_move(0, 0);
    assert_eq!(game.board().get(Position::TOP_LEFT), Cell::Occupied(Player::O));
    assert_eq!(game.current_player(), Player::X);

    let outcome = play_all(&mut game, &[(1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(outcome, Outcome::Win(Player::O));
}

#[test]
fn test_players_alternate() {
    let mut game = GameState::new();
    play_all(&mut game, &[(0, 0), (1, 1), (2, 2), (0, 2)]);

    let players: Vec<_> = game.history().iter().map(|m| m.player).collect();
    assert_eq!(players, [Player::X, Player::O, Player::X, Player::O]);
    assert_eq!(game.board().count(Player::X), 2);
    assert_eq!(game.board().count(Player::O), 2);
}
