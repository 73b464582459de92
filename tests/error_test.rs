use std::io;

use kiln::error::{exit_code, Error};

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::TemplateNotFoundError { template: "missing".to_string() };
    assert_eq!(
        err.to_string(),
        "Template 'missing' not found in the catalog or registry"
    );

    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config");

    let err = Error::HookError("script failed".to_string());
    assert_eq!(err.to_string(), "Hook execution error: script failed");
}

#[test]
fn test_exit_codes() {
    assert_eq!(exit_code(&Error::Aborted), 255);
    assert_eq!(exit_code(&Error::ConfigError("bad".to_string())), 1);
    assert_eq!(
        exit_code(&Error::IoError(io::Error::new(io::ErrorKind::Other, "io"))),
        1
    );
}
