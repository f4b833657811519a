//! Event handler for the main screen

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen, Focus};

/// Handle main screen input
pub fn handle_main_screen(app: &mut App, key_code: KeyCode) -> bool {
    match key_code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.focus_next(),
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => app.decrease_length(),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            app.increase_length()
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if app.focus != Focus::Length {
                app.toggle_focused();
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') => app.toggle_digits(),
        KeyCode::Char('s') | KeyCode::Char('S') => app.toggle_symbols(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.regenerate(),
        // Copy to clipboard
        KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('y') => app.copy_password(),
        KeyCode::Char('?') => {
            app.current_screen = CurrentScreen::Help;
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.current_screen = CurrentScreen::Exiting;
        }
        _ => {}
    }
    false
}
