//! CLI interface module
//!
//! Non-interactive commands: password generation and config scaffolding.

pub mod commands;

use crate::cli::{Commands, ConfigCommands};
use crate::errors::Result;
use commands::{GenerateOptions, config_generate, run_generate};

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Gen {
            length,
            digits,
            symbols,
            count,
            copy,
        } => {
            let defaults = crate::config::get_config().generator;
            let options = GenerateOptions::resolve(defaults, length, digits, symbols, count, copy);
            let mut clipboard = crate::clipboard::one_shot_clipboard();
            let mut stdout = std::io::stdout().lock();
            run_generate(&options, &mut clipboard, &mut stdout)
        }

        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}
