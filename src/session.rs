//! Password session state
//!
//! Owns the current [`PasswordConfig`] and the password generated from it.
//! Every mutator updates the config and immediately runs a new generation
//! pass, so `password().chars().count() == config().length` holds between
//! calls.

use tracing::{debug, warn};

use crate::clipboard::ClipboardWriter;
use crate::generator::{self, MAX_LENGTH, MIN_LENGTH, PasswordConfig};

/// Result of the most recent copy request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

pub struct Session<C: ClipboardWriter> {
    config: PasswordConfig,
    password: String,
    clipboard: C,
    last_copy: Option<CopyOutcome>,
}

impl<C: ClipboardWriter> Session<C> {
    /// Create a session and run the initial generation pass.
    pub fn new(config: PasswordConfig, clipboard: C) -> Self {
        let mut session = Self {
            config: config.clamped(),
            password: String::new(),
            clipboard,
            last_copy: None,
        };
        session.regenerate();
        session
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    /// Character count of the displayed password.
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    pub fn last_copy(&self) -> Option<&CopyOutcome> {
        self.last_copy.as_ref()
    }

    pub fn set_length(&mut self, length: usize) {
        let clamped = generator::clamp_length(length);
        if clamped != length {
            debug!("Length {} clamped to {}", length, clamped);
        }
        self.config.length = clamped;
        self.regenerate();
    }

    pub fn set_include_digits(&mut self, include: bool) {
        self.config.include_digits = include;
        self.regenerate();
    }

    pub fn set_include_symbols(&mut self, include: bool) {
        self.config.include_symbols = include;
        self.regenerate();
    }

    pub fn increase_length(&mut self) {
        if self.config.length < MAX_LENGTH {
            self.set_length(self.config.length + 1);
        }
    }

    pub fn decrease_length(&mut self) {
        if self.config.length > MIN_LENGTH {
            self.set_length(self.config.length - 1);
        }
    }

    pub fn toggle_digits(&mut self) {
        self.set_include_digits(!self.config.include_digits);
    }

    pub fn toggle_symbols(&mut self) {
        self.set_include_symbols(!self.config.include_symbols);
    }

    /// Replace the current password with a fresh one for the same config.
    pub fn regenerate(&mut self) {
        self.password = generator::generate(&self.config);
        debug!(
            length = self.config.length,
            digits = self.config.include_digits,
            symbols = self.config.include_symbols,
            "Password regenerated"
        );
    }

    /// Write the current password to the clipboard.
    ///
    /// Failures are logged and recorded in [`Session::last_copy`]; they never
    /// propagate.
    pub fn copy_current_password(&mut self) {
        let outcome = match self.clipboard.write_text(&self.password) {
            Ok(()) => {
                debug!("Password copied to clipboard");
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!("Failed to copy password to clipboard: {}", e);
                CopyOutcome::Failed(e.message().to_string())
            }
        };
        self.last_copy = Some(outcome);
    }
}
