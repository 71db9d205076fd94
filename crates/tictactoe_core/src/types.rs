//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first unless configured otherwise).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.column()]
    }

    /// Sets the cell at the given position.
    ///
    /// This is raw storage access. Move legality (the cell being empty, the
    /// game still running) is enforced by `GameState`, which never hands out
    /// a mutable board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.column()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all rows of the board.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(|pos| (pos, self.get(pos)))
    }

    /// Counts the cells holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Counts the cells holding any mark.
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, cell)| *cell != Cell::Empty).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, "|")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{}", r * GRID_SIZE + c + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
            }
        }
        Ok(())
    }
}

/// Current outcome of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a full line for this player.
    Win(Player),
    /// Board is full and nobody completed a line.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!("O".parse::<Player>(), Ok(Player::O));
        assert!("Z".parse::<Player>().is_err());
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::all().all(|pos| board.is_empty(pos)));
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Position::CENTER, Cell::Occupied(Player::X));
        board.set(Position::TOP_LEFT, Cell::Occupied(Player::O));
        assert_eq!(board.to_string(), "O|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Win(Player::O).is_terminal());
        assert_eq!(Outcome::Win(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
