//! touch creates a new file and pre-populates it with a header comment and
//! optional boilerplate, driven by a configuration file keyed on file extension.

/// Command-line interface module for the touch application
pub mod cli;

/// Parsing of the `touch.conf` directive file
pub mod config;

/// Comment prefix table and other fixed values
pub mod constants;

/// Error types and handling for the touch application
pub mod error;

/// Logger initialisation
pub mod logger;

/// Target file creation: ties parsing, rendering and writing together
pub mod processor;

/// Overwrite confirmation
pub mod prompt;

/// Option merging, placeholder substitution and header rendering
pub mod renderer;
