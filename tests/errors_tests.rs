use passgen::errors::{PassgenError, Result};
use std::error::Error;

#[test]
fn test_clipboard_error() {
    let error = PassgenError::clipboard("no display server");

    assert!(matches!(error, PassgenError::Clipboard(_)));
    assert_eq!(error.code(), "E001");
    assert_eq!(error.message(), "no display server");
    assert_eq!(error.to_string(), "Clipboard Error: no display server");
}

#[test]
fn test_error_codes_are_unique() {
    let errors = [
        PassgenError::clipboard("x"),
        PassgenError::config("x"),
        PassgenError::file_operation("x"),
        PassgenError::serialization("x"),
        PassgenError::terminal("x"),
    ];
    let mut codes: Vec<&str> = errors.iter().map(|e| e.code()).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), errors.len());
}

#[test]
fn test_from_io_error() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let error: PassgenError = io_error.into();

    assert!(matches!(error, PassgenError::FileOperation(_)));
    assert!(error.message().contains("missing"));
}

#[test]
fn test_colored_format_contains_parts() {
    let error = PassgenError::config("bad value");
    let formatted = error.format_colored();

    assert!(formatted.contains("E002"));
    assert!(formatted.contains("Configuration Error"));
    assert!(formatted.contains("bad value"));
}

#[test]
fn test_result_alias_and_error_trait() {
    fn fails() -> Result<()> {
        Err(PassgenError::terminal("raw mode"))
    }

    let err = fails().unwrap_err();
    let dyn_err: &dyn Error = &err;
    assert!(dyn_err.source().is_none());
    assert!(dyn_err.to_string().contains("raw mode"));
}
