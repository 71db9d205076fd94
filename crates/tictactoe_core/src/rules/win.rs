//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, GRID_SIZE, Player, Position};
use tracing::instrument;

/// A full-length line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// Positions covered by this line, in order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).filter_map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(column) => Position::new(i, column),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, GRID_SIZE - 1 - i),
        })
    }

    /// Returns true if every cell of the line holds the player's mark.
    pub fn is_filled_by(self, board: &Board, player: Player) -> bool {
        self.positions()
            .all(|pos| board.get(pos) == Cell::Occupied(player))
    }
}

/// Every row, then every column, then both diagonals.
pub fn lines() -> impl Iterator<Item = Line> {
    (0..GRID_SIZE)
        .map(Line::Row)
        .chain((0..GRID_SIZE).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

/// Checks whether `player` owns a full row, column or diagonal.
///
/// Each line is evaluated on its own; the result is the OR over all of them.
#[instrument(skip(board))]
pub fn evaluate_win(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Returns the first line completely owned by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    lines().find(|line| line.is_filled_by(board, player))
}
