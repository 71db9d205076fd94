//! Terminal UI: the board as a grid of clickable cells.

mod app;
mod input;
mod layout;
mod surface;
mod ui;

pub use app::App;
pub use layout::BoardLayout;
pub use surface::TerminalSurface;

use crate::config::AppConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs one game until the player quits or closes the result dialog.
#[instrument(skip_all, fields(title = %config.window().title()))]
pub fn run(config: &AppConfig) -> Result<()> {
    info!(first_player = %config.first_player(), "Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = ?e, "Event loop error");
    }
    info!(outcome = %app.controller().state().outcome(), "Terminal UI closed");
    res
}

/// Blocking event loop: draw, wait for one event, handle it completely.
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| {
            app.set_area(frame.area());
            ui::draw(frame, app);
        })?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
