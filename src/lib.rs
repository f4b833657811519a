//! passgen - A small random password generator
//!
//! # Features
//! - **cli**: Non-interactive `gen` and `config` commands
//! - **tui**: Terminal user interface (default entry point)
//! - **clipboard**: System clipboard support via arboard
//!
//! # Architecture
//! - `generator`: Alphabet construction and uniform sampling
//! - `session`: Current configuration and password, regenerated on every change
//! - `clipboard`: Clipboard seam used by the copy action
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration loading (TOML + env)
//! - `system`: Logging and panic handling

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod errors;
pub mod generator;
pub mod interfaces;
pub mod session;
pub mod system;
