//! Move count invariant: the counter matches the board.

use super::super::{CELL_COUNT, GameState};
use super::Invariant;

/// Invariant: moves played equals history length equals occupied cells.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(game: &GameState) -> bool {
        let moves = game.moves_played();
        moves <= CELL_COUNT && moves == game.history().len() && moves == game.board().occupied()
    }

    fn description() -> &'static str {
        "Move counter matches history and occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_agree_after_moves() {
        let mut game = GameState::new();
        game.play_move(0, 0);
        game.play_move(0, 0);
        game.play_move(2, 2);
        assert_eq!(game.moves_played(), 2);
        assert!(MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_skewed_counter_violates() {
        let mut game = GameState::new();
        game.play_move(0, 0);

        game.moves_played = 2;

        assert!(!MoveCountInvariant::holds(&game));
    }
}
