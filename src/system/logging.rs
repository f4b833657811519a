//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_appender::rolling;

use crate::config::LoggingConfig;
use crate::system::panic_handler::RunMode;

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// In TUI mode without a configured log file, output is discarded so it
/// cannot draw over the alternate screen.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(
    config: &LoggingConfig,
    mode: RunMode,
) -> tracing_appender::non_blocking::WorkerGuard {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) => open_log_writer(log_file, config),
        None if mode == RunMode::Tui => Box::new(std::io::sink()),
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    if config.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}

fn open_log_writer(log_file: &str, config: &LoggingConfig) -> Box<dyn std::io::Write + Send + Sync> {
    let path = std::path::Path::new(log_file);

    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(std::path::Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or("passgen.log");
        match rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups as usize)
            .build(dir)
        {
            Ok(appender) => return Box::new(appender),
            Err(e) => eprintln!("[WARN] Failed to create rolling log appender: {}", e),
        }
    }

    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(file) => Box::new(file),
        Err(e) => {
            eprintln!("[WARN] Failed to open log file {}: {}", log_file, e);
            Box::new(std::io::sink())
        }
    }
}
