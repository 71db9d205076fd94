//! Terminal-side record of what the board shows.

use crate::controller::Surface;
use tictactoe_core::{GRID_SIZE, Player, Position};
use tracing::debug;

/// What the terminal draws: one mark per cell, a board lock and the result
/// dialog.
///
/// A cell accepts input only while it is blank and the board is unlocked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSurface {
    marks: [[Option<Player>; GRID_SIZE]; GRID_SIZE],
    locked: bool,
    dialog: Option<String>,
}

impl TerminalSurface {
    /// Creates a blank, unlocked surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark displayed at `pos`, if any.
    pub fn mark(&self, pos: Position) -> Option<Player> {
        self.marks[pos.row()][pos.column()]
    }

    /// Whether a click on `pos` should reach the game.
    pub fn is_enabled(&self, pos: Position) -> bool {
        !self.locked && self.mark(pos).is_none()
    }

    /// Whether the whole board is locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Message of the result dialog, once it is open.
    pub fn dialog(&self) -> Option<&str> {
        self.dialog.as_deref()
    }
}

impl Surface for TerminalSurface {
    fn render(&mut self, position: Position, mark: Player) {
        debug!(%position, %mark, "Rendering mark");
        self.marks[position.row()][position.column()] = Some(mark);
    }

    fn render_game_over(&mut self, message: &str) {
        self.locked = true;
        self.dialog = Some(message.to_string());
    }
}
