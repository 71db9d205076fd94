//! Bounds-checked board coordinates.

use super::types::{Board, CELL_COUNT, GRID_SIZE};
use tracing::instrument;

const ROW_NAMES: [&str; GRID_SIZE] = ["Top", "Middle", "Bottom"];
const COLUMN_NAMES: [&str; GRID_SIZE] = ["left", "center", "right"];

/// A cell coordinate on the board.
///
/// A `Position` is always in bounds: the only ways to build one are
/// [`Position::new`] and [`Position::from_index`], both of which reject
/// coordinates outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Top edge, middle column.
    pub const TOP_CENTER: Position = Position::at(0, 1);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::at(0, 2);
    /// Middle row, left column.
    pub const MIDDLE_LEFT: Position = Position::at(1, 0);
    /// Center cell.
    pub const CENTER: Position = Position::at(1, 1);
    /// Middle row, right column.
    pub const MIDDLE_RIGHT: Position = Position::at(1, 2);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::at(2, 0);
    /// Bottom edge, middle column.
    pub const BOTTOM_CENTER: Position = Position::at(2, 1);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        (row < GRID_SIZE && column < GRID_SIZE).then_some(Self { row, column })
    }

    /// Creates a position from its row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self::at(index / GRID_SIZE, index % GRID_SIZE))
    }

    /// Converts the position to its row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row * GRID_SIZE + self.column
    }

    /// Row of this position.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column of this position.
    pub fn column(self) -> usize {
        self.column
    }

    /// All positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|index| Self::at(index / GRID_SIZE, index % GRID_SIZE))
    }

    /// Position shifted by the given deltas, or `None` if that leaves the board.
    pub fn offset(self, rows: isize, columns: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(rows)?;
        let column = self.column.checked_add_signed(columns)?;
        Self::new(row, column)
    }

    /// Human-readable label, e.g. `Top-left` or `Center`.
    pub fn label(self) -> String {
        if self == Self::CENTER {
            return "Center".to_string();
        }
        format!("{}-{}", ROW_NAMES[self.row], COLUMN_NAMES[self.column])
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn empty_cells(board: &Board) -> Vec<Position> {
        Self::all().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_bounds_checked_construction() {
        assert_eq!(Position::new(1, 1), Some(Position::CENTER));
        assert_eq!(Position::new(3, 0), None);
        assert_eq!(Position::new(0, 3), None);
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(Position::TOP_LEFT.to_index(), 0);
        assert_eq!(Position::CENTER.to_index(), 4);
        assert_eq!(Position::BOTTOM_RIGHT.to_index(), 8);
        assert_eq!(Position::from_index(5), Some(Position::MIDDLE_RIGHT));
        assert_eq!(Position::from_index(9), None);
        assert!(Position::all().enumerate().all(|(i, pos)| pos.to_index() == i));
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Position::CENTER.offset(-1, 1), Some(Position::TOP_RIGHT));
        assert_eq!(Position::TOP_LEFT.offset(-1, 0), None);
        assert_eq!(Position::BOTTOM_RIGHT.offset(0, 1), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::TOP_LEFT.label(), "Top-left");
        assert_eq!(Position::CENTER.label(), "Center");
        assert_eq!(Position::BOTTOM_CENTER.label(), "Bottom-center");
    }

    #[test]
    fn test_empty_cells_filters_occupied() {
        let mut board = Board::new();
        board.set(Position::TOP_LEFT, Cell::Occupied(Player::X));
        board.set(Position::CENTER, Cell::Occupied(Player::O));

        let empty = Position::empty_cells(&board);
        assert_eq!(empty.len(), 7);
        assert!(!empty.contains(&Position::TOP_LEFT));
        assert!(!empty.contains(&Position::CENTER));
        assert!(empty.contains(&Position::BOTTOM_RIGHT));
    }
}
