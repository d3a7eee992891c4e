//! Error handling for the CLI application

use std::fmt;

/// Errors raised by the command layer before filtering starts
#[derive(Debug)]
pub enum CliError {
    /// Input file missing or not a regular file
    FileNotFound(String),
    /// Glob pattern that cannot be parsed
    InvalidPattern(String),
    /// Invalid configuration file or option combination
    ConfigError(String),
    /// An output path would overwrite an input
    OutputConflict(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::OutputConflict(path) => {
                write!(f, "Output path is also an input: {path}")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
