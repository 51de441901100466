//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Code point argument that could not be parsed
    InvalidCodePoint(String),
    /// Configuration error
    ConfigError(String),
    /// Non-printable characters were found and the caller asked to fail
    FindingsPresent(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::InvalidCodePoint(arg) => write!(f, "Invalid code point: {arg}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::FindingsPresent(count) => {
                write!(f, "Found {count} non-printable character(s)")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
