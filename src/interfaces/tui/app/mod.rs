//! App state for the TUI
//!
//! Wraps the password [`Session`] with screen, focus and status-line state.

use crate::clipboard::ClipboardWriter;
use crate::generator::PasswordConfig;
use crate::session::{CopyOutcome, Session};

/// 当前屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Main,
    Help,
    Exiting,
}

/// 主界面上获得焦点的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Length,
    Digits,
    Symbols,
}

impl Focus {
    /// 循环切换到下一个控件
    pub fn next(self) -> Self {
        match self {
            Self::Length => Self::Digits,
            Self::Digits => Self::Symbols,
            Self::Symbols => Self::Length,
        }
    }

    /// 循环切换到上一个控件
    pub fn previous(self) -> Self {
        match self {
            Self::Length => Self::Symbols,
            Self::Digits => Self::Length,
            Self::Symbols => Self::Digits,
        }
    }
}

pub struct App {
    pub session: Session<Box<dyn ClipboardWriter>>,
    pub current_screen: CurrentScreen,
    pub focus: Focus,

    // UI state
    pub status_message: String,
    pub error_message: String,
}

impl App {
    pub fn new(config: PasswordConfig, clipboard: Box<dyn ClipboardWriter>) -> App {
        App {
            session: Session::new(config, clipboard),
            current_screen: CurrentScreen::Main,
            focus: Focus::Length,
            status_message: String::new(),
            error_message: String::new(),
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Toggle the checkbox under focus. Does nothing on the length slider.
    pub fn toggle_focused(&mut self) {
        match self.focus {
            Focus::Length => {}
            Focus::Digits => self.toggle_digits(),
            Focus::Symbols => self.toggle_symbols(),
        }
    }

    pub fn toggle_digits(&mut self) {
        self.session.toggle_digits();
        let state = on_off(self.session.config().include_digits);
        self.set_status(format!("Digits {}", state));
    }

    pub fn toggle_symbols(&mut self) {
        self.session.toggle_symbols();
        let state = on_off(self.session.config().include_symbols);
        self.set_status(format!("Symbols {}", state));
    }

    pub fn increase_length(&mut self) {
        self.session.increase_length();
        self.set_status(format!("Length {}", self.session.config().length));
    }

    pub fn decrease_length(&mut self) {
        self.session.decrease_length();
        self.set_status(format!("Length {}", self.session.config().length));
    }

    pub fn regenerate(&mut self) {
        self.session.regenerate();
        self.set_status("New password generated".to_string());
    }

    /// Copy the current password and report the outcome on the status line.
    pub fn copy_password(&mut self) {
        self.session.copy_current_password();
        match self.session.last_copy() {
            Some(CopyOutcome::Copied) => self.set_status("Copied to clipboard".to_string()),
            Some(CopyOutcome::Failed(reason)) => {
                let message = format!("Clipboard unavailable: {}", reason);
                self.set_error(message);
            }
            None => {}
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
