//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use super::layout::BoardLayout;
use super::surface::TerminalSurface;
use crate::config::{AppConfig, WindowConfig};
use crate::controller::GameController;
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{Outcome, Position};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the game controller explicitly; input handlers borrow it mutably for
/// the duration of one event.
#[derive(Debug)]
pub struct App {
    controller: GameController<TerminalSurface>,
    window: WindowConfig,
    cursor: Position,
    area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates the application for a fresh game.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: GameController::new(*config.first_player(), TerminalSurface::new()),
            window: config.window().clone(),
            cursor: Position::CENTER,
            area: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn controller(&self) -> &GameController<TerminalSurface> {
        &self.controller
    }

    /// Gets the window settings.
    pub fn window(&self) -> &WindowConfig {
        &self.window
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records the terminal area of the latest frame.
    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout for the latest frame.
    pub fn layout(&self) -> BoardLayout {
        BoardLayout::compute(self.area, &self.window)
    }

    /// One-line status shown under the board.
    pub fn status_message(&self) -> String {
        let state = self.controller.state();
        match state.outcome() {
            Outcome::InProgress => format!("Player {} to play - q quits", state.current_player()),
            outcome => format!("{} - Enter quits", outcome),
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if self.controller.surface().dialog().is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
                self.quit();
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.click(pos);
                }
            }
            _ => {}
        }
    }

    /// Handles a mouse event. Only left-button presses do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let layout = self.layout();
        if self.controller.surface().dialog().is_some() {
            if layout.quit_button_contains(event.column, event.row) {
                self.quit();
            }
            return;
        }

        if let Some(pos) = layout.cell_at(event.column, event.row) {
            self.cursor = pos;
            self.click(pos);
        }
    }

    /// Forwards a click to the game, but only for cells the board still
    /// offers.
    fn click(&mut self, pos: Position) {
        if !self.controller.surface().is_enabled(pos) {
            debug!(position = %pos, "Cell disabled, click dropped");
            return;
        }
        self.controller.on_position_clicked(pos);
    }

    fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_core::Player;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default());
        app.set_area(Rect::new(0, 0, 80, 25));
        app
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        let state = app.controller().state();
        assert_eq!(state.moves_played(), 1);
        assert_eq!(app.controller().surface().mark(Position::TOP_CENTER), Some(Player::X));
    }

    #[test]
    fn test_digit_plays_numbered_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Char('9'));
        assert_eq!(app.cursor(), Position::BOTTOM_RIGHT);
        assert_eq!(app.controller().surface().mark(Position::BOTTOM_RIGHT), Some(Player::X));
    }

    #[test]
    fn test_played_cell_is_disabled() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.controller().state().moves_played(), 1);
        assert_eq!(app.controller().state().current_player(), Player::O);
    }

    #[test]
    fn test_mouse_click_plays_cell() {
        let mut app = app();
        let cell = app.layout().cell(Position::BOTTOM_LEFT);
        app.handle_mouse(left_click(cell.x + 1, cell.y + 1));
        assert_eq!(app.controller().surface().mark(Position::BOTTOM_LEFT), Some(Player::X));
    }

    #[test]
    fn test_win_opens_dialog_and_quit_button_exits() {
        let mut app = app();
        for key in ['1', '5', '2', '9', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.controller().state().outcome(), Outcome::Win(Player::X));
        assert_eq!(app.controller().surface().dialog(), Some("The winner is:\nPLAYER X"));

        // The board is locked: digits no longer reach the game
        app.handle_key(KeyCode::Char('4'));
        assert_eq!(app.controller().state().moves_played(), 5);
        assert!(!app.should_quit());

        let button = app.layout().quit_button();
        app.handle_mouse(left_click(button.x + 1, button.y + 1));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits_mid_game() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }
}
