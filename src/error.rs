//! Error handling for the touch application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that stop the file from being created.
///
/// Mistakes inside the configuration file are not represented here: they are
/// logged and the offending line is skipped.
#[derive(Error, Debug)]
pub enum Error {
    /// The target exists and the overwrite was not confirmed.
    #[error("Cannot proceed: file '{path}' already exists and overwrite was not confirmed.")]
    FileExistsError { path: String },

    /// The target could not be created or opened for writing.
    #[error("Could not create file '{path}'. Original error: {source}")]
    FileCreateError { path: String, source: io::Error },

    /// Interaction with the terminal failed.
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
