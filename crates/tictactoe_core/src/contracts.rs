//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions gate every move; postconditions re-check
//! the game invariants after the move in debug builds.

use super::action::{Move, MoveError};
use super::game::GameState;
use super::invariants::{GameInvariants, InvariantSet};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move on a won or drawn game.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition: a move is legal if the game is running and the
/// cell is empty. Bounds are already guaranteed by `Position`.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.moves_played() != before.moves_played() + 1 {
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} moves, found {}",
                before.moves_played() + 1,
                after.moves_played()
            )));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
