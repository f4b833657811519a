//! Panic handler module
//!
//! - TUI mode: restore the terminal before anything is printed
//! - All modes: append a report to crash.log, then hand over to the
//!   previously installed hook (color-eyre's when installed first)

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location) {
            eprintln!("Failed to write crash log: {}", e);
        }

        previous_hook(panic_info);
        eprintln!("Details saved to crash.log");
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

/// Write crash log
fn write_crash_log(timestamp: &str, message: &str, location: &str) -> std::io::Result<()> {
    let backtrace = std::backtrace::Backtrace::force_capture();
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==========================================")?;
    writeln!(file, "Crash Report - {}", timestamp)?;
    writeln!(file, "==========================================")?;
    writeln!(file, "Message: {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "\nBacktrace:")?;
    writeln!(file, "{:?}", backtrace)?;
    writeln!(file, "==========================================\n")?;

    Ok(())
}
