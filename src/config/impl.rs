use std::path::Path;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to defaults when `init_config()` has not been called, so
/// library users and tests never hit an uninitialized config.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration from `passgen.toml` in the current
/// directory. If the file doesn't exist, uses in-memory defaults.
///
/// # Examples
/// ```no_run
/// use passgen::config::init_config;
/// init_config();
/// ```
pub fn init_config() {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load()));
}

/// Initialize the global configuration from an explicit file path.
pub fn init_config_from<P: AsRef<Path>>(path: P) {
    let path = path.as_ref();
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load_from(path)));
}
