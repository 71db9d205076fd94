//! Alternating turn invariant: players alternate starting with the opener.

use super::super::GameState;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The history starts with the first player and never shows the same player
/// twice in a row. While the game runs, the player to move is the one who
/// did not make the last move; after the game ends it is the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.current_player() == game.first_player();
        };

        if history[0].player != game.first_player() {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        if game.is_terminal() {
            game.current_player() == last.player
        } else {
            game.current_player() == last.player.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first player"
    }
}
