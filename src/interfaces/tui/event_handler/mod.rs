//! Event handling for TUI
//!
//! Handles keyboard events and delegates to appropriate handlers
//!
//! - main_screen: password display and generator controls
//! - misc_screens: Help, Exiting

use ratatui::crossterm::event::KeyCode;

use crate::interfaces::tui::app::{App, CurrentScreen};

mod main_screen;
mod misc_screens;

use main_screen::*;
use misc_screens::*;

/// Handle keyboard input based on current screen. Returns `true` to exit.
pub fn handle_key_event(app: &mut App, key_code: KeyCode) -> bool {
    match app.current_screen {
        CurrentScreen::Main => handle_main_screen(app, key_code),
        CurrentScreen::Help => handle_help_screen(app, key_code),
        CurrentScreen::Exiting => handle_exiting_screen(app, key_code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardWriter;
    use crate::errors::{PassgenError, Result};
    use crate::generator::PasswordConfig;
    use crate::interfaces::tui::app::Focus;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedRecorder(Arc<Mutex<Vec<String>>>);

    impl ClipboardWriter for SharedRecorder {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Broken;

    impl ClipboardWriter for Broken {
        fn write_text(&mut self, _text: &str) -> Result<()> {
            Err(PassgenError::clipboard("no display"))
        }
    }

    fn app() -> App {
        App::new(PasswordConfig::default(), Box::new(SharedRecorder::default()))
    }

    #[test]
    fn test_arrow_keys_change_length() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Right);
        handle_key_event(&mut app, KeyCode::Char('+'));
        assert_eq!(app.session.config().length, 10);
        assert_eq!(app.session.password_len(), 10);
        handle_key_event(&mut app, KeyCode::Left);
        assert_eq!(app.session.password_len(), 9);
    }

    #[test]
    fn test_focus_and_toggle() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(app.focus, Focus::Digits);
        handle_key_event(&mut app, KeyCode::Char(' '));
        assert!(app.session.config().include_digits);

        handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Symbols);
        handle_key_event(&mut app, KeyCode::Enter);
        assert!(app.session.config().include_symbols);

        handle_key_event(&mut app, KeyCode::Up);
        assert_eq!(app.focus, Focus::Digits);
    }

    #[test]
    fn test_space_on_length_does_nothing() {
        let mut app = app();
        let before = *app.session.config();
        handle_key_event(&mut app, KeyCode::Char(' '));
        assert_eq!(*app.session.config(), before);
    }

    #[test]
    fn test_copy_writes_current_password() {
        let recorder = SharedRecorder::default();
        let mut app = App::new(PasswordConfig::default(), Box::new(recorder.clone()));
        handle_key_event(&mut app, KeyCode::Char('c'));

        let writes = recorder.0.lock().unwrap();
        assert_eq!(writes.as_slice(), [app.session.password().to_string()]);
        assert_eq!(app.status_message, "Copied to clipboard");
    }

    #[test]
    fn test_copy_failure_shows_error() {
        let mut app = App::new(PasswordConfig::default(), Box::new(Broken));
        let exit = handle_key_event(&mut app, KeyCode::Char('y'));
        assert!(!exit);
        assert!(app.error_message.contains("no display"));
    }

    #[test]
    fn test_exit_flow() {
        let mut app = app();
        assert!(!handle_key_event(&mut app, KeyCode::Char('q')));
        assert_eq!(app.current_screen, CurrentScreen::Exiting);
        assert!(!handle_key_event(&mut app, KeyCode::Char('n')));
        assert_eq!(app.current_screen, CurrentScreen::Main);
        handle_key_event(&mut app, KeyCode::Esc);
        assert!(handle_key_event(&mut app, KeyCode::Char('y')));
    }

    #[test]
    fn test_help_opens_and_closes() {
        let mut app = app();
        handle_key_event(&mut app, KeyCode::Char('?'));
        assert_eq!(app.current_screen, CurrentScreen::Help);
        handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.current_screen, CurrentScreen::Main);
    }
}
