//! Event handlers for Help and Exiting screens

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

/// Handle help screen input
pub fn handle_help_screen(app: &mut App, key_code: KeyCode) -> bool {
    if matches!(
        key_code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
    ) {
        app.current_screen = CurrentScreen::Main;
    }
    false
}

/// Handle exit confirmation input
pub fn handle_exiting_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Char('y') | KeyCode::Char('Y') => true,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Main;
            false
        }
        _ => false,
    }
}
