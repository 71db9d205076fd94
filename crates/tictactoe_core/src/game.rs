//! The game state machine.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{self, Line};
use super::types::{Board, CELL_COUNT, Cell, Outcome, Player};
use super::Position;
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Owns the board, the player to move, the move counter and the outcome.
/// Every accepted move writes exactly one empty cell; once the outcome is
/// terminal no further move is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) first_player: Player,
    pub(crate) current_player: Player,
    pub(crate) moves_played: usize,
    pub(crate) outcome: Outcome,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game with X to move first.
    pub fn new() -> Self {
        Self::with_first_player(Player::X)
    }

    /// Creates a new game with the given player to move first.
    #[instrument]
    pub fn with_first_player(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            first_player,
            current_player: first_player,
            moves_played: 0,
            outcome: Outcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player who opened the game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the number of accepted moves.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Plays the current player's mark at (`row`, `column`).
    ///
    /// Illegal moves (off the board, on an occupied cell, after the game has
    /// ended) are ignored and leave the state untouched. Returns the outcome
    /// after the call either way.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_move(&mut self, row: usize, column: usize) -> Outcome {
        match self.try_play(row, column) {
            Ok(outcome) => outcome,
            Err(e) => {
                debug!(error = %e, row, column, "Move rejected");
                self.outcome
            }
        }
    }

    /// Like [`GameState::play_move`], but reports why a move was rejected.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfBounds` if either coordinate is off the board
    /// - `MoveError::CellOccupied` if the cell already holds a mark
    /// - `MoveError::GameOver` if the game has already ended
    pub fn try_play(&mut self, row: usize, column: usize) -> Result<Outcome, MoveError> {
        let pos = Position::new(row, column).ok_or(MoveError::OutOfBounds { row, column })?;
        self.play_at(pos)
    }

    /// Plays the current player's mark at an already validated position.
    ///
    /// Preconditions are always checked; postconditions only in debug builds.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play_at(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        let action = Move::new(self.current_player, pos);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(pos, Cell::Occupied(action.player));
        self.history.push(action);
        self.moves_played += 1;
        self.outcome = self.evaluate_outcome();

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.moves_played, "Game over");
        } else {
            self.current_player = self.current_player.opponent();
        }

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        Ok(self.outcome)
    }

    /// Checks whether `player` owns a full row, column or diagonal.
    pub fn evaluate_win(&self, player: Player) -> bool {
        rules::evaluate_win(&self.board, player)
    }

    /// Outcome of the board as left by the current player's placement.
    ///
    /// Only the player who just moved can have completed a line, so only
    /// their mark is checked. A full board without that win is a draw.
    pub fn evaluate_outcome(&self) -> Outcome {
        let mover = self.current_player;
        if self.evaluate_win(mover) {
            Outcome::Win(mover)
        } else if self.moves_played == CELL_COUNT {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.outcome
            .winner()
            .and_then(|winner| rules::winning_line(&self.board, winner))
    }

    /// Empty cells that can still be played; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_terminal() {
            Vec::new()
        } else {
            Position::empty_cells(&self.board)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
