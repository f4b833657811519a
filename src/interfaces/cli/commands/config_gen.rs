//! Generate config command

use std::path::Path;

use colored::Colorize;

use crate::config::StaticConfig;
use crate::errors::{PassgenError, Result};

/// 默认示例配置文件名
pub const SAMPLE_CONFIG_PATH: &str = "passgen.example.toml";

/// Generate example configuration file
pub fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| SAMPLE_CONFIG_PATH.to_string());

    if !force && Path::new(&path).exists() {
        return Err(PassgenError::file_operation(format!(
            "{} already exists, use --force to overwrite",
            path
        )));
    }

    println!(
        "{} {}",
        "Generating configuration file...".yellow(),
        path.blue()
    );

    StaticConfig::save_sample_config(&path)?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}
