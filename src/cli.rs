//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for passgen using clap's derive macros.

use clap::{Parser, Subcommand};

/// passgen - A small random password generator
#[derive(Parser)]
#[command(name = "passgen")]
#[command(version)]
#[command(about = "A small random password generator", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: passgen.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start TUI mode (default when no command is given)
    #[cfg(feature = "tui")]
    Tui,

    /// Generate passwords and print them, one per line
    Gen {
        /// Password length, clamped to 6..=20 (default from config)
        #[arg(short, long)]
        length: Option<usize>,

        /// Include digits (0-9)
        #[arg(short, long)]
        digits: bool,

        /// Include symbols (@#$%^&*!)
        #[arg(short, long)]
        symbols: bool,

        /// Number of passwords to generate
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Copy the last generated password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: passgen.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
