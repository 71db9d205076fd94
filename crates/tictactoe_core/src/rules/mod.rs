//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so they can be tested without a running
//! game and reused by contracts.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, evaluate_win, lines, winning_line};
