//! Terminal User Interface (TUI) module
//!
//! Interactive password generator: length slider, character class toggles,
//! read-only password field and one-key copy.

use std::io::{self, Stderr, Write};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod ui;

pub use app::{App, CurrentScreen, Focus};

use crate::clipboard::default_clipboard;
use crate::errors::{PassgenError, Result};
use crate::generator::PasswordConfig;
use ui::ui;

type Term = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
pub fn run_tui(config: PasswordConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(terminal_error)?;
    let mut terminal: Term = setup_terminal(io::stderr(), || {
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        disable_raw_mode()
    })
    .map_err(terminal_error)?;

    let mut app = App::new(config, default_clipboard());
    info!("TUI started with length {}", app.session.config().length);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    if let Err(err) = res {
        error!("TUI event loop failed: {}", err);
        return Err(terminal_error(err));
    }

    Ok(())
}

/// Enter the alternate screen on `out`.
///
/// Raw mode is already on when this runs; on failure `restore` is called
/// before the error is returned so the shell is usable again.
fn setup_terminal<W, F>(mut out: W, restore: F) -> io::Result<Terminal<CrosstermBackend<W>>>
where
    W: Write,
    F: FnOnce() -> io::Result<()>,
{
    let entered = execute!(out, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(out)));

    entered.inspect_err(|err| {
        error!("Terminal setup failed: {}", err);
        if let Err(e) = restore() {
            error!("Failed to restore terminal: {}", e);
        }
    })
}

/// Main application loop
fn run_app(terminal: &mut Term, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && event_handler::handle_key_event(app, key.code)
        {
            return Ok(());
        }
    }
}

fn terminal_error(err: io::Error) -> PassgenError {
    PassgenError::terminal(err.to_string())
}
