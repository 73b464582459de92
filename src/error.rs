//! Error handling for the kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for kiln operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    /// No catalog or registry template matched the requested name
    #[error("Template '{template}' not found in the catalog or registry")]
    TemplateNotFoundError { template: String },

    /// Represents errors that occur while resolving or copying templates
    #[error("Template error: {0}")]
    TemplateError(String),

    /// Represents errors raised while cloning a remote template
    #[error("Git error: {0}")]
    Git2Error(#[from] git2::Error),

    /// Represents errors raised while rendering a template location
    #[error("Render error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors in reading or writing the package descriptor
    #[error("Metadata error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors in project or packager configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Represents errors raised by interactive prompts
    #[error("Prompt error: {0}")]
    PromptError(#[from] dialoguer::Error),

    /// Dependency installation exited with a failure status
    #[error("Install error: {0}")]
    InstallError(String),

    /// Represents errors that occur during hook script execution
    #[error("Hook execution error: {0}")]
    HookError(String),

    /// The user cancelled the run (declined overwrite or dismissed a prompt)
    #[error("aborted")]
    Aborted,
}

/// Convenience type alias for Results with kiln's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code reported to the shell for the given error.
///
/// A user-cancelled run mirrors the classic `exit(-1)` as 255; every other
/// failure maps to 1.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Aborted => 255,
        _ => 1,
    }
}

/// Default error handler that prints the error and exits the program.
pub fn default_error_handler(err: Error) -> ! {
    if matches!(err, Error::Aborted) {
        eprintln!("Aborted.");
    } else {
        eprintln!("{err}");
    }
    std::process::exit(exit_code(&err));
}
