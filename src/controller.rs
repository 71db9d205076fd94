//! Glue between cell clicks, the game state and whatever draws the board.

use tictactoe_core::{GameState, Outcome, Player, Position};
use tracing::{debug, info, instrument};

/// Rendering boundary the controller drives.
///
/// Implementations only draw; they never decide whether a move is legal.
pub trait Surface {
    /// Shows `mark` in the cell at `position` and stops accepting input there.
    fn render(&mut self, position: Position, mark: Player);

    /// Locks the whole board and shows the end-of-game dialog.
    fn render_game_over(&mut self, message: &str);
}

/// Text shown in the end-of-game dialog, if the game has ended.
pub fn game_over_message(outcome: Outcome) -> Option<String> {
    match outcome {
        Outcome::InProgress => None,
        Outcome::Win(player) => Some(format!("The winner is:\nPLAYER {}", player)),
        Outcome::Draw => Some("There is no\nwinner!".to_string()),
    }
}

/// Owns one game and the surface it is drawn on.
#[derive(Debug)]
pub struct GameController<S> {
    state: GameState,
    surface: S,
}

impl<S: Surface> GameController<S> {
    /// Starts a new game with `first_player` to move.
    pub fn new(first_player: Player, surface: S) -> Self {
        Self {
            state: GameState::with_first_player(first_player),
            surface,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Handles a click on (`row`, `column`).
    ///
    /// Clicks that the game rejects are logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn on_cell_clicked(&mut self, row: usize, column: usize) -> Outcome {
        match Position::new(row, column) {
            Some(pos) => self.on_position_clicked(pos),
            None => {
                debug!(row, column, "Click outside the board ignored");
                self.state.outcome()
            }
        }
    }

    /// Handles a click on an already validated position.
    #[instrument(skip(self))]
    pub fn on_position_clicked(&mut self, pos: Position) -> Outcome {
        let mark = self.state.current_player();

        let outcome = match self.state.play_at(pos) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, "Click rejected");
                return self.state.outcome();
            }
        };

        self.surface.render(pos, mark);

        if let Some(message) = game_over_message(outcome) {
            info!(%outcome, "Showing result dialog");
            self.surface.render_game_over(&message);
        }

        outcome
    }
}
