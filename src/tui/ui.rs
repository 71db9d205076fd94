//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use super::layout::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tictactoe_core::Position;

const APP_COLOR: Color = Color::Rgb(0xe6, 0xe6, 0xe6);
const CELL_COLOR: Color = Color::Rgb(0x40, 0x40, 0x40);
const SYMBOL_COLOR: Color = Color::Rgb(0xf2, 0xf2, 0xf2);
const HINT_COLOR: Color = Color::Rgb(0x80, 0x80, 0x80);
const CURSOR_COLOR: Color = Color::Rgb(0x1e, 0x90, 0xff);
const WIN_COLOR: Color = Color::Rgb(0xff, 0xc1, 0x07);

/// Renders the whole frame: window, board, status line and result dialog.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = app.layout();

    let window = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(app.window().title().as_str()).alignment(Alignment::Center))
        .style(Style::default().bg(APP_COLOR).fg(Color::Black));
    frame.render_widget(Clear, layout.window());
    frame.render_widget(window, layout.window());

    let winning: Vec<Position> = app
        .controller()
        .state()
        .winning_line()
        .map(|line| line.positions().collect())
        .unwrap_or_default();

    for pos in Position::all() {
        draw_cell(frame, &layout, app, pos, winning.contains(&pos));
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().bg(APP_COLOR).fg(Color::Black))
        .alignment(Alignment::Center);
    frame.render_widget(status, layout.status());

    if let Some(message) = app.controller().surface().dialog() {
        draw_dialog(frame, &layout, message);
    }
}

fn draw_cell(frame: &mut Frame, layout: &BoardLayout, app: &App, pos: Position, winning: bool) {
    let area = layout.cell(pos);
    let surface = app.controller().surface();
    let has_cursor = pos == app.cursor() && !surface.is_locked();

    let mut block = Block::default().style(Style::default().bg(CELL_COLOR));
    if has_cursor {
        block = block
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CURSOR_COLOR).add_modifier(Modifier::BOLD));
    }
    frame.render_widget(block, area);

    let (symbol, style) = match surface.mark(pos) {
        Some(player) => {
            let fg = if winning { WIN_COLOR } else { SYMBOL_COLOR };
            (player.to_string(), Style::default().fg(fg).add_modifier(Modifier::BOLD))
        }
        None if surface.is_enabled(pos) => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(HINT_COLOR),
        ),
        None => (String::new(), Style::default()),
    };

    let text = Paragraph::new(Line::from(Span::styled(symbol, style.bg(CELL_COLOR))))
        .alignment(Alignment::Center);
    frame.render_widget(text, middle_line(area));
}

fn draw_dialog(frame: &mut Frame, layout: &BoardLayout, message: &str) {
    let dialog = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title(Line::from("Tic-Tac Toe").alignment(Alignment::Center))
        .style(Style::default().bg(APP_COLOR).fg(Color::Black));
    frame.render_widget(Clear, layout.dialog());
    frame.render_widget(dialog, layout.dialog());

    let lines: Vec<Line> = message.lines().map(Line::from).collect();
    let text = Paragraph::new(lines)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(text, layout.dialog_message());

    let button = Paragraph::new("QUIT")
        .alignment(Alignment::Center)
        .style(Style::default().bg(CELL_COLOR).fg(SYMBOL_COLOR).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Thick));
    frame.render_widget(button, layout.quit_button());
}

/// Single-row rectangle through the vertical middle of `area`.
fn middle_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}
