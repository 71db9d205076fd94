//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Game logic**: [`tictactoe_core`], re-exported here
//! - **Controller**: [`GameController`] owns one [`GameState`] and forwards
//!   accepted moves to a [`Surface`]
//! - **Terminal UI**: [`tui`], a ratatui/crossterm [`Surface`] with mouse and
//!   keyboard input
//! - **Config**: [`AppConfig`] from TOML plus command-line overrides
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameController, Outcome, Player, Position, Surface};
//!
//! #[derive(Default)]
//! struct Log(Vec<String>);
//!
//! impl Surface for Log {
//!     fn render(&mut self, position: Position, mark: Player) {
//!         self.0.push(format!("{mark} at {position}"));
//!     }
//!     fn render_game_over(&mut self, message: &str) {
//!         self.0.push(message.to_string());
//!     }
//! }
//!
//! let mut controller = GameController::new(Player::X, Log::default());
//! assert_eq!(controller.on_cell_clicked(1, 1), Outcome::InProgress);
//! assert_eq!(controller.surface().0, ["X at Center"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod controller;
mod logging;
pub mod tui;

pub use config::{AppConfig, ConfigError, ConfigOverrides, WindowConfig, WindowSize};
pub use controller::{GameController, Surface, game_over_message};
pub use logging::init_tracing;

pub use tictactoe_core::{
    Board, CELL_COUNT, Cell, GRID_SIZE, GameState, Line, Move, MoveError, Outcome, Player,
    Position, evaluate_win,
};
