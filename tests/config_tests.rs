use std::fs;

use passgen::config::{LoggingConfig, StaticConfig};
use passgen::generator::PasswordConfig;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = StaticConfig::default();
    assert_eq!(config.generator, PasswordConfig::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "text");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = StaticConfig::try_load_from(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.generator.length, 8);
    assert!(!config.generator.include_symbols);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("passgen.toml");
    fs::write(
        &path,
        r#"
[generator]
length = 14
include_symbols = true

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = StaticConfig::try_load_from(&path).unwrap();
    assert_eq!(config.generator.length, 14);
    assert!(config.generator.include_symbols);
    assert!(!config.generator.include_digits);
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn test_invalid_file_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[generator]\nlength = \"long\"\n").unwrap();

    assert!(StaticConfig::try_load_from(&path).is_err());
    let config = StaticConfig::load_from(&path);
    assert_eq!(config.generator.length, 8);
}

#[test]
fn test_env_override() {
    let env = config::Map::from([
        ("PG__LOGGING__MAX_BACKUPS".to_string(), "9".to_string()),
        ("PG__GENERATOR__INCLUDE_DIGITS".to_string(), "true".to_string()),
        ("OTHER__LOGGING__LEVEL".to_string(), "trace".to_string()),
    ]);
    let dir = TempDir::new().unwrap();
    let config = StaticConfig::try_load_with_env(dir.path().join("none.toml"), Some(env)).unwrap();
    assert_eq!(config.logging.max_backups, 9);
    assert!(config.generator.include_digits);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("passgen.toml");
    fs::write(&path, "[generator]\nlength = 14\n").unwrap();

    let env = config::Map::from([("PG__GENERATOR__LENGTH".to_string(), "18".to_string())]);
    let config = StaticConfig::try_load_with_env(&path, Some(env)).unwrap();
    assert_eq!(config.generator.length, 18);
}

#[test]
fn test_sample_config_round_trips() {
    let sample = StaticConfig::generate_sample_config().unwrap();
    assert!(sample.contains("[generator]"));
    assert!(sample.contains("[logging]"));

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("sample.toml");
    StaticConfig::save_sample_config(&path).unwrap();

    let loaded = StaticConfig::try_load_from(&path).unwrap();
    assert_eq!(loaded.generator, PasswordConfig::default());
    assert_eq!(loaded.logging.level, LoggingConfig::default().level);
}
