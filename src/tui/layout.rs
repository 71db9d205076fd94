//! Screen geometry: where the window, cells and dialog sit, and which cell a
//! mouse click landed on.

use crate::config::WindowConfig;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use tictactoe_core::{GRID_SIZE, Position};

const DIALOG_WIDTH: u16 = 28;
const DIALOG_HEIGHT: u16 = 9;
const QUIT_BUTTON_WIDTH: u16 = 12;
const QUIT_BUTTON_HEIGHT: u16 = 3;

/// Rectangles for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    window: Rect,
    cells: [[Rect; GRID_SIZE]; GRID_SIZE],
    status: Rect,
    dialog: Rect,
    dialog_message: Rect,
    quit_button: Rect,
}

impl BoardLayout {
    /// Lays the window out inside `area`.
    ///
    /// A resizable window fills `area`; otherwise it keeps its configured
    /// size (clamped to `area`) and is centered.
    pub fn compute(area: Rect, window: &WindowConfig) -> Self {
        let window_rect = if *window.resizable() {
            area
        } else {
            let size = window.size();
            center_rect(area, size.width, size.height)
        };

        let inner = window_rect.inner(Margin::new(1, 1));
        let [board, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let mut cells = [[Rect::default(); GRID_SIZE]; GRID_SIZE];
        let rows = Layout::vertical([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
            .spacing(1)
            .split(board);
        for (r, row_area) in rows.iter().enumerate() {
            let columns = Layout::horizontal([Constraint::Ratio(1, GRID_SIZE as u32); GRID_SIZE])
                .spacing(2)
                .split(*row_area);
            for (c, cell) in columns.iter().enumerate() {
                cells[r][c] = *cell;
            }
        }

        let dialog = center_rect(window_rect, DIALOG_WIDTH, DIALOG_HEIGHT);
        let dialog_inner = dialog.inner(Margin::new(1, 1));
        let [dialog_message, button_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(QUIT_BUTTON_HEIGHT)])
                .areas(dialog_inner);
        let quit_button = center_rect(button_row, QUIT_BUTTON_WIDTH, QUIT_BUTTON_HEIGHT);

        Self {
            window: window_rect,
            cells,
            status,
            dialog,
            dialog_message,
            quit_button,
        }
    }

    /// Outer window rectangle.
    pub fn window(&self) -> Rect {
        self.window
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.row()][pos.column()]
    }

    /// Status line below the board.
    pub fn status(&self) -> Rect {
        self.status
    }

    /// Result dialog rectangle.
    pub fn dialog(&self) -> Rect {
        self.dialog
    }

    /// Area for the dialog message.
    pub fn dialog_message(&self) -> Rect {
        self.dialog_message
    }

    /// The dialog's quit button.
    pub fn quit_button(&self) -> Rect {
        self.quit_button
    }

    /// Cell under the terminal coordinate (`x`, `y`), if any.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        Position::all().find(|pos| contains(self.cell(*pos), x, y))
    }

    /// Whether (`x`, `y`) falls on the quit button.
    pub fn quit_button_contains(&self, x: u16, y: u16) -> bool {
        contains(self.quit_button, x, y)
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}

/// A `width` x `height` rectangle centered in `area`, clamped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
