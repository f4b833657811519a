use clap::Parser;

use passgen::cli::{Cli, Commands};
use passgen::config::{get_config, init_config, init_config_from};
use passgen::system::logging::init_logging;
use passgen::system::panic_handler::{RunMode, install_panic_hook};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    let mode = match cli.command {
        None => RunMode::Tui,
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => RunMode::Tui,
        Some(_) => RunMode::Cli,
    };

    install_panic_hook(mode);
    let _guard = init_logging(&config.logging, mode);

    match cli.command {
        #[cfg(feature = "tui")]
        None | Some(Commands::Tui) => {
            passgen::interfaces::tui::run_tui(config.generator)?;
        }
        #[cfg(not(feature = "tui"))]
        None => {
            eprintln!("TUI support is not enabled in this build, try `passgen gen`");
        }
        #[cfg(feature = "cli")]
        Some(cmd) => {
            if let Err(e) = passgen::interfaces::cli::run_cli_command(cmd) {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
        }
        #[cfg(not(feature = "cli"))]
        Some(_) => {
            eprintln!("CLI support is not enabled in this build");
        }
    }

    Ok(())
}
