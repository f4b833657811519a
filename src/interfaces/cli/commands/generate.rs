//! Generate passwords command

use std::io::Write;

use colored::Colorize;
use tracing::{info, warn};

use crate::clipboard::ClipboardWriter;
use crate::errors::Result;
use crate::generator::{self, PasswordConfig};

/// Resolved options for `passgen gen`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub config: PasswordConfig,
    pub count: usize,
    pub copy: bool,
    /// Length asked for on the command line, when it had to be clamped
    pub requested_length: Option<usize>,
}

impl GenerateOptions {
    /// Merge command-line flags over the configured defaults.
    ///
    /// Flags can only switch character classes on; the length is clamped to
    /// the allowed range.
    pub fn resolve(
        defaults: PasswordConfig,
        length: Option<usize>,
        digits: bool,
        symbols: bool,
        count: usize,
        copy: bool,
    ) -> Self {
        let wanted = length.unwrap_or(defaults.length);
        let config = PasswordConfig {
            length: wanted,
            include_digits: defaults.include_digits || digits,
            include_symbols: defaults.include_symbols || symbols,
        }
        .clamped();

        Self {
            requested_length: (config.length != wanted).then_some(wanted),
            config,
            count,
            copy,
        }
    }
}

/// Print `count` passwords to `out`, optionally copying the last one.
///
/// A clipboard failure is reported as a warning and does not fail the command.
pub fn run_generate<C, W>(options: &GenerateOptions, clipboard: &mut C, out: &mut W) -> Result<()>
where
    C: ClipboardWriter + ?Sized,
    W: Write,
{
    if let Some(requested) = options.requested_length {
        eprintln!(
            "{} length {} is out of range, using {}",
            "[WARN]".yellow().bold(),
            requested,
            options.config.length
        );
    }

    let passwords = generator::generate_many(&options.config, options.count);
    for password in &passwords {
        writeln!(out, "{}", password)?;
    }
    info!("Generated {} password(s)", passwords.len());

    if options.copy
        && let Some(last) = passwords.last()
    {
        match clipboard.write_text(last) {
            Ok(()) => eprintln!("{}", "Copied to clipboard".green()),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                eprintln!(
                    "{} could not copy to clipboard: {}",
                    "[WARN]".yellow().bold(),
                    e.message()
                );
            }
        }
    }

    Ok(())
}
