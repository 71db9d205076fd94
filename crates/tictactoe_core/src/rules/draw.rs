//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use super::win::evaluate_win;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| cell != Cell::Empty)
}

/// A full board where neither player owns a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && Player::iter().all(|player| !evaluate_win(board, player))
}
