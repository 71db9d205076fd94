//! Pure tic-tac-toe game logic.
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Outcome`], [`Position`]
//! - **Rules**: pure win/draw evaluation over a board ([`rules`])
//! - **Game**: [`GameState`], the move-by-move state machine
//! - **Contracts**: preconditions gating every move, postconditions backed by
//!   [`invariants`] in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Outcome, Player};
//!
//! let mut game = GameState::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     assert_eq!(game.play_move(row, column), Outcome::InProgress);
//! }
//! assert_eq!(game.play_move(0, 2), Outcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use game::GameState;
pub use position::Position;
pub use rules::{Line, evaluate_win};
pub use types::{Board, CELL_COUNT, Cell, GRID_SIZE, Outcome, Player};
